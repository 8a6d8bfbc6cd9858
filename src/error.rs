//! Error types for glint.
//!
//! The simulation core itself cannot fail — it is arithmetic plus draw
//! calls. Everything fallible lives at the edges: GPU and window setup,
//! and PNG capture.

use std::fmt;

/// Errors that can occur during GPU initialization.
#[derive(Debug)]
pub enum GpuError {
    /// Failed to create a surface for rendering.
    SurfaceCreation(wgpu::CreateSurfaceError),
    /// No compatible GPU adapter found.
    NoAdapter,
    /// Failed to create GPU device.
    DeviceCreation(wgpu::RequestDeviceError),
}

impl fmt::Display for GpuError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GpuError::SurfaceCreation(e) => write!(f, "Failed to create GPU surface: {}", e),
            GpuError::NoAdapter => write!(f, "No compatible GPU adapter found. Ensure your system has a GPU with WebGPU/Vulkan/Metal/DX12 support."),
            GpuError::DeviceCreation(e) => write!(f, "Failed to create GPU device: {}", e),
        }
    }
}

impl std::error::Error for GpuError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GpuError::SurfaceCreation(e) => Some(e),
            GpuError::DeviceCreation(e) => Some(e),
            GpuError::NoAdapter => None,
        }
    }
}

impl From<wgpu::CreateSurfaceError> for GpuError {
    fn from(e: wgpu::CreateSurfaceError) -> Self {
        GpuError::SurfaceCreation(e)
    }
}

impl From<wgpu::RequestDeviceError> for GpuError {
    fn from(e: wgpu::RequestDeviceError) -> Self {
        GpuError::DeviceCreation(e)
    }
}

/// Errors that can occur when running the windowed shell.
#[derive(Debug)]
pub enum ShellError {
    /// Failed to create or drive the event loop.
    EventLoop(winit::error::EventLoopError),
    /// Failed to create the window.
    Window(winit::error::OsError),
    /// GPU initialization failed.
    Gpu(GpuError),
}

impl fmt::Display for ShellError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShellError::EventLoop(e) => write!(f, "Failed to run event loop: {}", e),
            ShellError::Window(e) => write!(f, "Failed to create window: {}", e),
            ShellError::Gpu(e) => write!(f, "GPU error: {}", e),
        }
    }
}

impl std::error::Error for ShellError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ShellError::EventLoop(e) => Some(e),
            ShellError::Window(e) => Some(e),
            ShellError::Gpu(e) => Some(e),
        }
    }
}

impl From<winit::error::EventLoopError> for ShellError {
    fn from(e: winit::error::EventLoopError) -> Self {
        ShellError::EventLoop(e)
    }
}

impl From<winit::error::OsError> for ShellError {
    fn from(e: winit::error::OsError) -> Self {
        ShellError::Window(e)
    }
}

impl From<GpuError> for ShellError {
    fn from(e: GpuError) -> Self {
        ShellError::Gpu(e)
    }
}

/// Errors that can occur when exporting a pixmap capture.
#[derive(Debug)]
pub enum CaptureError {
    /// Pixel buffer size did not match the image dimensions.
    BufferSize,
    /// Failed to encode or write the image.
    Image(image::ImageError),
}

impl fmt::Display for CaptureError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CaptureError::BufferSize => write!(f, "Pixel buffer does not match image dimensions"),
            CaptureError::Image(e) => write!(f, "Failed to write capture: {}", e),
        }
    }
}

impl std::error::Error for CaptureError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CaptureError::Image(e) => Some(e),
            CaptureError::BufferSize => None,
        }
    }
}

impl From<image::ImageError> for CaptureError {
    fn from(e: image::ImageError) -> Self {
        CaptureError::Image(e)
    }
}
