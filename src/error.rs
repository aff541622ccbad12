use winit::error::{EventLoopError, OsError};

/// Startup failures. Nothing after initialization is fallible.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Invalid framebuffer dimensions {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },

    #[error("Could not allocate {cells} framebuffer cells")]
    Allocation { cells: usize },

    #[error("Event loop error: {0}")]
    EventLoop(#[from] EventLoopError),

    #[error("Window creation failed: {0}")]
    Window(#[from] OsError),

    #[error("Surface creation failed: {0}")]
    Surface(#[from] wgpu::CreateSurfaceError),

    #[error("No compatible graphics adapter")]
    NoAdapter,

    #[error("Device request failed: {0}")]
    Device(#[from] wgpu::RequestDeviceError),

    #[error("Surface is not supported by the adapter")]
    SurfaceConfig,
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
