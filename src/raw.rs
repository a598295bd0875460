//! Purpose of this module is to provide helpers for the C-callable surface,
//! not for direct consumption.
//!
//! Statuses are passed through verbatim. The only thing added is a null
//! check of the caller supplied pointers.
use crate::error::E_POINTER;
use crate::query::VirtualDesktopQuery;
use crate::Error;
use std::{ffi::c_void, mem::ManuallyDrop};
use windows::{
    core::{Vtable, GUID, HRESULT},
    Win32::{
        Foundation::{BOOL, HWND},
        UI::Shell::IVirtualDesktopManager,
    },
};

const S_OK: HRESULT = HRESULT(0);

/// Turns an owned interface into the opaque pointer handed to C callers. The
/// pointer carries one reference.
pub trait IntoRawHandle {
    fn into_raw_handle(self) -> *mut c_void;
}

impl IntoRawHandle for IVirtualDesktopManager {
    fn into_raw_handle(self) -> *mut c_void {
        let raw = Vtable::as_raw(&self);
        std::mem::forget(self);
        raw
    }
}

/// Activation result as a handle, null on any failure
pub fn instance_or_null<H: IntoRawHandle>(result: Result<H, Error>) -> *mut c_void {
    match result {
        Ok(instance) => instance.into_raw_handle(),
        Err(er) => {
            log::warn!("Virtual desktop manager activation failed: {}", er);
            std::ptr::null_mut()
        }
    }
}

/// Runs the activation and stores its result in `out`, returning the
/// activation status. On failure `out` is set to null. Nothing is activated
/// when `out` is null.
///
/// # Safety
///
/// `out` must be null or valid for writes.
pub unsafe fn store_instance<H, F>(activate: F, out: *mut *mut c_void) -> HRESULT
where
    H: IntoRawHandle,
    F: FnOnce() -> Result<H, Error>,
{
    let Some(out) = out.as_mut() else {
        return E_POINTER.into();
    };
    match activate() {
        Ok(instance) => {
            *out = instance.into_raw_handle();
            S_OK
        }
        Err(er) => {
            log::warn!("Virtual desktop manager activation failed: {}", er);
            *out = std::ptr::null_mut();
            er.hresult().into()
        }
    }
}

/// Borrows the interface behind a handle for the duration of `f`, the
/// reference count is left as it was.
///
/// # Safety
///
/// `handle` must be null or a pointer produced by [`IntoRawHandle`] which
/// has not been released.
pub unsafe fn with_manager<F>(handle: *mut c_void, f: F) -> HRESULT
where
    F: FnOnce(&IVirtualDesktopManager) -> HRESULT,
{
    if handle.is_null() {
        return E_POINTER.into();
    }
    let manager = ManuallyDrop::new(IVirtualDesktopManager::from_raw(handle));
    f(&manager)
}

/// Releases the reference carried by a handle. Null is ignored.
///
/// # Safety
///
/// `handle` must be null or a pointer produced by [`IntoRawHandle`], and it
/// must not be used afterwards.
pub unsafe fn release_manager(handle: *mut c_void) {
    if handle.is_null() {
        return;
    }
    log::trace!("Releasing virtual desktop manager {:?}", handle);
    drop(IVirtualDesktopManager::from_raw(handle));
}

/// # Safety
///
/// `out` must be null or valid for writes.
pub unsafe fn forward_window_desktop_id<Q: VirtualDesktopQuery + ?Sized>(
    query: &Q,
    hwnd: HWND,
    out: *mut GUID,
) -> HRESULT {
    let Some(out) = out.as_mut() else {
        return E_POINTER.into();
    };
    let hr = query.window_desktop_id(hwnd, out);
    if hr.is_err() {
        log::trace!("GetWindowDesktopId {:?} returned {:?}", hwnd, hr);
    }
    hr
}

/// # Safety
///
/// `out` must be null or valid for writes.
pub unsafe fn forward_is_window_on_current_desktop<Q: VirtualDesktopQuery + ?Sized>(
    query: &Q,
    hwnd: HWND,
    out: *mut BOOL,
) -> HRESULT {
    let Some(out) = out.as_mut() else {
        return E_POINTER.into();
    };
    let hr = query.is_window_on_current_desktop(hwnd, out);
    if hr.is_err() {
        log::trace!("IsWindowOnCurrentVirtualDesktop {:?} returned {:?}", hwnd, hr);
    }
    hr
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::fake::FakeManager;
    use crate::HRESULT as Status;

    const E_FAIL: u32 = 0x80004005;

    struct FakeHandle(u32);

    impl IntoRawHandle for FakeHandle {
        fn into_raw_handle(self) -> *mut c_void {
            Box::into_raw(Box::new(self.0)) as *mut c_void
        }
    }

    fn free_fake(handle: *mut c_void) -> u32 {
        unsafe { *Box::from_raw(handle as *mut u32) }
    }

    #[test]
    fn test_instance_or_null_success() {
        let handle = instance_or_null(Ok(FakeHandle(42)));
        assert!(!handle.is_null());
        assert_eq!(free_fake(handle), 42);
    }

    #[test]
    fn test_instance_or_null_failure() {
        for code in [E_FAIL, 0x80040154, 0x800401F0, 0x800706BA, 0x80070005] {
            let handle = instance_or_null::<FakeHandle>(Err(Status(code).into()));
            assert!(handle.is_null());
        }
    }

    #[test]
    fn test_store_instance_keeps_status() {
        for code in [E_FAIL, 0x80040154, 0x800401F0, 0x80070005] {
            let mut out = 1usize as *mut c_void;
            let hr =
                unsafe { store_instance(|| Err::<FakeHandle, _>(Status(code).into()), &mut out) };
            assert_eq!(Status::from(hr), Status(code));
            assert!(out.is_null());
        }

        let mut out = std::ptr::null_mut();
        let hr = unsafe { store_instance(|| Ok(FakeHandle(7)), &mut out) };
        assert_eq!(hr, S_OK);
        assert_eq!(free_fake(out), 7);
    }

    #[test]
    fn test_store_instance_null_out() {
        let mut activated = false;
        let hr = unsafe {
            store_instance(
                || {
                    activated = true;
                    Ok(FakeHandle(7))
                },
                std::ptr::null_mut(),
            )
        };
        assert_eq!(Status::from(hr), E_POINTER);
        assert!(!activated);
    }

    #[test]
    fn test_with_manager_null_handle() {
        let hr = unsafe { with_manager(std::ptr::null_mut(), |_| S_OK) };
        assert_eq!(Status::from(hr), E_POINTER);
    }

    #[test]
    fn test_release_null_handle() {
        unsafe { release_manager(std::ptr::null_mut()) };
    }

    #[test]
    fn test_forward_desktop_id() {
        let cases = [
            (0u32, 0x11111111_2222_3333_4444_555555555555u128),
            (0, 0),
            (1, 0xaa509086_5ca9_4c25_8f95_589d3c07b48a),
        ];
        for (status, uuid) in cases {
            let fake = FakeManager::new(status).with_desktop(uuid);
            let mut out = GUID::from_u128(u128::MAX);
            let hr = unsafe { forward_window_desktop_id(&fake, HWND(0x10010), &mut out) };
            assert_eq!(Status::from(hr), Status(status));
            assert_eq!(out, GUID::from_u128(uuid));
            assert_eq!(fake.last_hwnd.get(), Some(HWND(0x10010)));
        }
    }

    #[test]
    fn test_forward_desktop_id_failure() {
        let fake = FakeManager::new(E_FAIL);
        let mut out = GUID::zeroed();
        let hr = unsafe { forward_window_desktop_id(&fake, HWND(3), &mut out) };
        assert_eq!(Status::from(hr), Status(E_FAIL));
        assert!(hr.is_err());
    }

    #[test]
    fn test_forward_on_current_desktop() {
        for status in [0u32, 1, E_FAIL, 0x8002802B] {
            for expected in [true, false] {
                let fake = FakeManager::new(status).with_on_current(expected);
                let mut out = BOOL::from(!expected);
                let hr =
                    unsafe { forward_is_window_on_current_desktop(&fake, HWND(99), &mut out) };
                assert_eq!(Status::from(hr), Status(status));
                assert_eq!(out.as_bool(), expected);
                assert_eq!(fake.last_hwnd.get(), Some(HWND(99)));
            }
        }
    }

    #[test]
    fn test_forward_null_out() {
        let fake = FakeManager::new(0);
        let hr = unsafe { forward_window_desktop_id(&fake, HWND(1), std::ptr::null_mut()) };
        assert_eq!(Status::from(hr), E_POINTER);
        let hr = unsafe {
            forward_is_window_on_current_desktop(&fake, HWND(1), std::ptr::null_mut())
        };
        assert_eq!(Status::from(hr), E_POINTER);
        assert_eq!(fake.last_hwnd.get(), None);
    }
}
