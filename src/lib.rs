//! Bindings for the documented `IVirtualDesktopManager` shell interface.
//!
//! ```ignore
//! use vdmanager::{ComApartment, VirtualDesktopManager};
//! use windows::Win32::Foundation::HWND;
//!
//! let apartment = ComApartment::sta().unwrap();
//! let manager = VirtualDesktopManager::new(&apartment).unwrap();
//! let hwnd = HWND(0x10010);
//! println!("{}", manager.get_window_desktop_id(hwnd).unwrap());
//! println!("{}", manager.is_window_on_current_desktop(hwnd).unwrap());
//! ```
#[cfg(windows)]
mod apartment;
pub mod clsid;
mod desktopid;
mod error;
mod hresult;
#[cfg(windows)]
mod manager;
pub mod query;
pub mod raw;


#[cfg(windows)]
pub use apartment::{ApartmentModel, ComApartment};
pub use clsid::CLSID_VirtualDesktopManager;
pub use desktopid::DesktopId;
pub use error::Error;
pub use hresult::HRESULT;
#[cfg(windows)]
pub use manager::{activate, activate_unchecked, ClassContext, VirtualDesktopManager};
pub use query::VirtualDesktopQuery;
pub use windows::Win32::Foundation::HWND;
