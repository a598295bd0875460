#![cfg(windows)]
#![allow(non_snake_case)]

mod debuglog;

use std::ffi::c_void;
use vdmanager::{activate_unchecked, raw, ClassContext};
use windows::{
    core::{GUID, HRESULT},
    Win32::Foundation::{BOOL, HWND},
};

/// Creates the shell's virtual desktop manager, null on failure.
///
/// COM must be initialized on the calling thread. Release the handle with
/// `ReleaseVirtualDesktopManagerInstance`.
#[no_mangle]
pub extern "C" fn CreateVirtualDesktopManagerInstance() -> *mut c_void {
    debuglog::init();
    raw::instance_or_null(unsafe { activate_unchecked(ClassContext::All) })
}

/// Same as `CreateVirtualDesktopManagerInstance` but returns the activation
/// status, `*result` is null on failure.
///
/// # Safety
///
/// `result` must be null or valid for writes.
#[no_mangle]
pub unsafe extern "C" fn CreateVirtualDesktopManagerInstanceEx(result: *mut *mut c_void) -> HRESULT {
    debuglog::init();
    raw::store_instance(|| activate_unchecked(ClassContext::All), result)
}

/// # Safety
///
/// `com_obj` must be null or a handle from one of the create functions, it
/// must not be used afterwards.
#[no_mangle]
pub unsafe extern "C" fn ReleaseVirtualDesktopManagerInstance(com_obj: *mut c_void) {
    raw::release_manager(com_obj)
}

/// # Safety
///
/// `com_obj` must be null or a live handle, `result` null or valid for writes.
#[no_mangle]
pub unsafe extern "C" fn GetWindowDesktopId(
    com_obj: *mut c_void,
    hwnd: HWND,
    result: *mut GUID,
) -> HRESULT {
    raw::with_manager(com_obj, |manager| {
        raw::forward_window_desktop_id(manager, hwnd, result)
    })
}

/// # Safety
///
/// `com_obj` must be null or a live handle, `result` null or valid for writes.
#[no_mangle]
pub unsafe extern "C" fn IsWindowOnCurrentVirtualDesktop(
    com_obj: *mut c_void,
    hwnd: HWND,
    result: *mut BOOL,
) -> HRESULT {
    raw::with_manager(com_obj, |manager| {
        raw::forward_is_window_on_current_desktop(manager, hwnd, result)
    })
}
