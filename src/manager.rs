use crate::{
    apartment::ComApartment, clsid::CLSID_VirtualDesktopManager, query, DesktopId, Error,
};
use std::marker::PhantomData;
use windows::Win32::{
    Foundation::HWND,
    System::Com::{
        CoCreateInstance, CLSCTX, CLSCTX_ALL, CLSCTX_INPROC_SERVER, CLSCTX_LOCAL_SERVER,
    },
    UI::Shell::IVirtualDesktopManager,
};

type Result<T> = std::result::Result<T, Error>;

/// Where the platform may look for the class when activating it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ClassContext {
    #[default]
    All,
    LocalServer,
    InprocServer,
}

impl From<ClassContext> for CLSCTX {
    fn from(ctx: ClassContext) -> Self {
        match ctx {
            ClassContext::All => CLSCTX_ALL,
            ClassContext::LocalServer => CLSCTX_LOCAL_SERVER,
            ClassContext::InprocServer => CLSCTX_INPROC_SERVER,
        }
    }
}

/// Activate the shell's virtual desktop manager in the given apartment.
pub fn activate(apartment: &ComApartment, ctx: ClassContext) -> Result<VirtualDesktopManager<'_>> {
    VirtualDesktopManager::with_class_context(apartment, ctx)
}

/// Activate without an apartment, for callers across the C boundary which
/// manage COM initialization themselves.
///
/// # Safety
///
/// COM must be initialized on the calling thread, and the returned interface
/// must not be used after that thread uninitializes it.
#[doc(hidden)]
pub unsafe fn activate_unchecked(ctx: ClassContext) -> Result<IVirtualDesktopManager> {
    log::debug!(
        "CoCreateInstance VirtualDesktopManager {:?} {:?}",
        ctx,
        std::thread::current().id()
    );
    CoCreateInstance(&CLSID_VirtualDesktopManager, None, CLSCTX::from(ctx)).map_err(Error::from)
}

/// Owned `IVirtualDesktopManager`, released when dropped.
///
/// Borrows the apartment it was created in so it can't outlive it.
pub struct VirtualDesktopManager<'a> {
    inner: IVirtualDesktopManager,
    _apartment: PhantomData<&'a ComApartment>,
}

impl<'a> VirtualDesktopManager<'a> {
    pub fn new(apartment: &'a ComApartment) -> Result<Self> {
        Self::with_class_context(apartment, ClassContext::All)
    }

    pub fn with_class_context(_apartment: &'a ComApartment, ctx: ClassContext) -> Result<Self> {
        Ok(VirtualDesktopManager {
            inner: unsafe { activate_unchecked(ctx)? },
            _apartment: PhantomData,
        })
    }

    /// Get window desktop ID
    pub fn get_window_desktop_id(&self, hwnd: HWND) -> Result<DesktopId> {
        query::get_window_desktop_id(&self.inner, hwnd)
    }

    /// Is window on current virtual desktop
    pub fn is_window_on_current_desktop(&self, hwnd: HWND) -> Result<bool> {
        query::is_window_on_current_desktop(&self.inner, hwnd)
    }
}

impl Drop for VirtualDesktopManager<'_> {
    fn drop(&mut self) {
        log::trace!("Releasing virtual desktop manager");
    }
}
