use std::sync::Arc;

use business::domain::capability::errors::FactoryError;
use business::domain::logger::Logger;
use business::domain::shared::value_objects::{StoreIdentifier, Vendor};

use crate::setup::bindings::{BindingError, VendorBindings};

/// Compile-time table from vendor to adapter constructor.
///
/// Entry order matters: the first entry is the fallback for stores this
/// binary does not know.
pub struct ProviderRegistry<T: ?Sized + 'static> {
    capability: &'static str,
    entries: &'static [(
        Vendor,
        fn(&VendorBindings, Arc<dyn Logger>) -> Result<Box<T>, BindingError>,
    )],
}

impl<T: ?Sized + 'static> ProviderRegistry<T> {
    pub const fn new(
        capability: &'static str,
        entries: &'static [(
            Vendor,
            fn(&VendorBindings, Arc<dyn Logger>) -> Result<Box<T>, BindingError>,
        )],
    ) -> Self {
        Self {
            capability,
            entries,
        }
    }

    pub fn vendors(&self) -> impl Iterator<Item = Vendor> + '_ {
        self.entries.iter().map(|(vendor, _)| *vendor)
    }

    pub fn resolve(
        &self,
        store: &StoreIdentifier,
        bindings: &VendorBindings,
        logger: &Arc<dyn Logger>,
    ) -> Result<Box<T>, FactoryError> {
        let requested = store
            .vendor()
            .and_then(|wanted| self.entries.iter().find(|(vendor, _)| *vendor == wanted));

        let (vendor, construct) = match requested {
            Some(entry) => entry,
            None => {
                let fallback = self.entries.first().ok_or_else(|| {
                    FactoryError::provider_instantiation_failed(
                        store.clone(),
                        BindingError::NoProviders,
                    )
                })?;
                logger.warn(&format!(
                    "Unrecognized store identifier '{}' for {}, falling back to {}",
                    store, self.capability, fallback.0
                ));
                fallback
            }
        };

        logger.debug(&format!("Creating {} {} provider", vendor, self.capability));

        construct(bindings, logger.clone())
            .map_err(|cause| FactoryError::provider_instantiation_failed(store.clone(), cause))
    }
}
