pub mod badge;
pub mod endpoint_wheel;
pub mod footer;
pub mod icons;
pub mod language_toggle;
pub mod server_address;

use gateway_landing_core::ControlSize;

/// Padding and type scale for a control size
pub fn size_class(size: ControlSize) -> &'static str {
    match size {
        ControlSize::Small => "px-3 py-1 text-xs",
        ControlSize::Default => "px-5 py-2 text-sm",
        ControlSize::Large => "px-8 py-3 text-base",
    }
}
