//! WGSL module creation with compile diagnostics.

/// Counts of compiler messages for a shader module.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub struct ShaderDiagnostics {
    pub errors: usize,
    pub warnings: usize,
}

impl ShaderDiagnostics {
    #[inline]
    pub fn is_clean(&self) -> bool {
        self.errors == 0 && self.warnings == 0
    }
}

/// Creates a WGSL shader module and logs its compilation messages.
///
/// Compile errors do not abort: the module is returned either way and
/// pipelines built from a broken module simply draw nothing.
pub fn create_checked_shader(
    device: &wgpu::Device,
    label: &str,
    source: &str,
) -> (wgpu::ShaderModule, ShaderDiagnostics) {
    let module = device.create_shader_module(wgpu::ShaderModuleDescriptor {
        label: Some(label),
        source: wgpu::ShaderSource::Wgsl(source.into()),
    });

    let info = pollster::block_on(module.get_compilation_info());
    let mut diag = ShaderDiagnostics::default();

    for msg in &info.messages {
        let at = msg
            .location
            .map(|l| format!("{}:{}", l.line_number, l.line_position))
            .unwrap_or_else(|| "?".to_string());

        match msg.message_type {
            wgpu::CompilationMessageType::Error => {
                diag.errors += 1;
                log::error!("shader compile error in {label} at {at}:\n{}", msg.message);
            }
            wgpu::CompilationMessageType::Warning => {
                diag.warnings += 1;
                log::warn!("shader warning in {label} at {at}: {}", msg.message);
            }
            wgpu::CompilationMessageType::Info => {
                log::debug!("shader note in {label} at {at}: {}", msg.message);
            }
        }
    }

    if diag.is_clean() {
        log::debug!("shader {label} compiled");
    }

    (module, diag)
}
