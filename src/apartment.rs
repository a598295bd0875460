use crate::{Error, HRESULT};
use std::marker::PhantomData;
use windows::Win32::System::Com::{
    CoInitializeEx, CoUninitialize, COINIT, COINIT_APARTMENTTHREADED, COINIT_MULTITHREADED,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ApartmentModel {
    /// COINIT_APARTMENTTHREADED
    #[default]
    SingleThreaded,

    /// COINIT_MULTITHREADED
    MultiThreaded,
}

impl From<ApartmentModel> for COINIT {
    fn from(model: ApartmentModel) -> Self {
        match model {
            ApartmentModel::SingleThreaded => COINIT_APARTMENTTHREADED,
            ApartmentModel::MultiThreaded => COINIT_MULTITHREADED,
        }
    }
}

/// COM initialization of the current thread.
///
/// Objects activated while this lives belong to this thread's apartment, so
/// the value can't be sent to other threads. Dropping it uninitializes COM.
pub struct ComApartment {
    model: ApartmentModel,
    _not_send: PhantomData<*const ()>,
}

impl ComApartment {
    pub fn new(model: ApartmentModel) -> Result<ComApartment, Error> {
        log::debug!(
            "CoInitializeEx {:?} {:?}",
            model,
            std::thread::current().id()
        );
        unsafe { CoInitializeEx(None, model.into()) }.map_err(|er| {
            let hr = HRESULT::from(er.code());
            log::warn!("CoInitializeEx {:?} failed: {:?}", model, hr);
            Error::from(hr)
        })?;
        Ok(ComApartment {
            model,
            _not_send: PhantomData,
        })
    }

    /// Single threaded apartment
    pub fn sta() -> Result<ComApartment, Error> {
        ComApartment::new(ApartmentModel::SingleThreaded)
    }

    /// Multi threaded apartment
    pub fn mta() -> Result<ComApartment, Error> {
        ComApartment::new(ApartmentModel::MultiThreaded)
    }

    pub fn model(&self) -> ApartmentModel {
        self.model
    }
}

impl Drop for ComApartment {
    fn drop(&mut self) {
        log::debug!("CoUninitialize {:?}", std::thread::current().id());
        unsafe { CoUninitialize() };
    }
}
