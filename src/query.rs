//! Status-level access to the two queries of `IVirtualDesktopManager`.
//!
//! Implementors return the platform status untouched, the helpers in this
//! module turn it into `Result`.
use crate::{DesktopId, Error, HRESULT};
use windows::{
    core::{Vtable, GUID},
    Win32::{
        Foundation::{BOOL, HWND},
        UI::Shell::IVirtualDesktopManager,
    },
};

type Result<T> = std::result::Result<T, Error>;

/// Something that answers the virtual desktop queries for a window.
///
/// Output parameters are only meaningful when the returned status is not a
/// failure.
pub trait VirtualDesktopQuery {
    fn window_desktop_id(&self, hwnd: HWND, out: &mut GUID) -> windows::core::HRESULT;

    fn is_window_on_current_desktop(&self, hwnd: HWND, out: &mut BOOL) -> windows::core::HRESULT;
}

// Calls go straight through the vtable so that positive success codes reach
// the caller unchanged.
impl VirtualDesktopQuery for IVirtualDesktopManager {
    fn window_desktop_id(&self, hwnd: HWND, out: &mut GUID) -> windows::core::HRESULT {
        unsafe { (Vtable::vtable(self).GetWindowDesktopId)(Vtable::as_raw(self), hwnd, out) }
    }

    fn is_window_on_current_desktop(&self, hwnd: HWND, out: &mut BOOL) -> windows::core::HRESULT {
        unsafe {
            (Vtable::vtable(self).IsWindowOnCurrentVirtualDesktop)(Vtable::as_raw(self), hwnd, out)
        }
    }
}

/// Desktop of the window, an all-zero id is returned as is
pub fn get_window_desktop_id<Q: VirtualDesktopQuery + ?Sized>(
    query: &Q,
    hwnd: HWND,
) -> Result<DesktopId> {
    let mut guid = GUID::zeroed();
    let status: Result<()> = HRESULT::from(query.window_desktop_id(hwnd, &mut guid)).into();
    status.map_err(|er| {
        log::debug!("GetWindowDesktopId {:?} failed: {:?}", hwnd, er);
        er
    })?;
    Ok(DesktopId(guid))
}

/// Is the window shown on the desktop the user is looking at
pub fn is_window_on_current_desktop<Q: VirtualDesktopQuery + ?Sized>(
    query: &Q,
    hwnd: HWND,
) -> Result<bool> {
    let mut on_current = BOOL(0);
    let status: Result<()> =
        HRESULT::from(query.is_window_on_current_desktop(hwnd, &mut on_current)).into();
    status.map_err(|er| {
        log::debug!("IsWindowOnCurrentVirtualDesktop {:?} failed: {:?}", hwnd, er);
        er
    })?;
    Ok(on_current.as_bool())
}

#[cfg(test)]
pub(crate) mod fake {
    use super::*;
    use std::cell::Cell;

    /// Answers with canned values and remembers the window it was asked about
    pub struct FakeManager {
        pub status: windows::core::HRESULT,
        pub desktop: GUID,
        pub on_current: BOOL,
        pub last_hwnd: Cell<Option<HWND>>,
    }

    impl FakeManager {
        pub fn new(status: u32) -> Self {
            FakeManager {
                status: windows::core::HRESULT(status as i32),
                desktop: GUID::zeroed(),
                on_current: BOOL(0),
                last_hwnd: Cell::new(None),
            }
        }

        pub fn with_desktop(mut self, uuid: u128) -> Self {
            self.desktop = GUID::from_u128(uuid);
            self
        }

        pub fn with_on_current(mut self, on_current: bool) -> Self {
            self.on_current = BOOL::from(on_current);
            self
        }
    }

    impl VirtualDesktopQuery for FakeManager {
        fn window_desktop_id(&self, hwnd: HWND, out: &mut GUID) -> windows::core::HRESULT {
            self.last_hwnd.set(Some(hwnd));
            *out = self.desktop;
            self.status
        }

        fn is_window_on_current_desktop(
            &self,
            hwnd: HWND,
            out: &mut BOOL,
        ) -> windows::core::HRESULT {
            self.last_hwnd.set(Some(hwnd));
            *out = self.on_current;
            self.status
        }
    }
}
