use crate::params::{DistortionParameters, DistortionUniforms};

/// Rendering backend fed once per frame. The core never reads its output.
pub trait RenderSink {
    fn submit(&mut self, params: &DistortionParameters, uniforms: &DistortionUniforms);
}
