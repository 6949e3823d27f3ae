use crate::errors::PickerError;
use crate::geolocation::{GeolocationError, Geolocator};
use crate::maps::{
    Coordinates, PlacePrediction, PlaceSearch, PlaceSearchText, ReverseGeocoder,
};
use crate::notices::{self, Notices};
use crate::store_client::AddressStoreApi;
use address_book::data_transfer::{AddressId, AddressRecord, AddressText, Category};
use std::sync::Arc;
use tokio::sync::Mutex;

mod ticket;

pub use ticket::Ticket;
use ticket::{TicketDispenser, Watermark};


/// What the picker currently shows.
#[derive(Debug, Clone, PartialEq)]
pub struct PickerState {
    pub position: Coordinates,
    pub address: Option<String>,
    pub category: Option<Category>,
    pub saved: Vec<AddressRecord>,
}

impl Default for PickerState {
    fn default() -> Self {
        Self {
            position: Coordinates::DEFAULT_CENTER,
            address: None,
            category: None,
            saved: vec![],
        }
    }
}

#[derive(Default)]
struct Inner {
    view: PickerState,
    position_applied: Watermark,
    address_applied: Watermark,
}

pub struct LocationPicker {
    store: Arc<dyn AddressStoreApi>,
    places: Arc<dyn PlaceSearch>,
    geocoder: Arc<dyn ReverseGeocoder>,
    geolocator: Arc<dyn Geolocator>,
    notices: Arc<dyn Notices>,
    tickets: TicketDispenser,
    inner: Mutex<Inner>,
}

impl LocationPicker {
    pub fn new(
        store: Arc<dyn AddressStoreApi>,
        places: Arc<dyn PlaceSearch>,
        geocoder: Arc<dyn ReverseGeocoder>,
        geolocator: Arc<dyn Geolocator>,
        notices: Arc<dyn Notices>,
    ) -> Self {
        Self {
            store,
            places,
            geocoder,
            geolocator,
            notices,
            tickets: TicketDispenser::default(),
            inner: Mutex::new(Inner::default()),
        }
    }

    pub async fn state(&self) -> PickerState {
        self.inner.lock().await.view.clone()
    }

    pub async fn mount(&self) {
        let _ = self.refresh().await;
    }

    /// Replaces the local list with the store's. A failure keeps the old list.
    #[tracing::instrument(skip(self), level = "debug")]
    pub async fn refresh(&self) -> Result<(), PickerError> {
        match self.store.list().await {
            Ok(saved) => {
                self.inner.lock().await.view.saved = saved;
                Ok(())
            }
            Err(err) => {
                tracing::error!("Error fetching addresses: {err:?}");
                Err(PickerError::Network(err))
            }
        }
    }

    #[tracing::instrument(skip(self), level = "info")]
    pub async fn search(&self, text: &str) -> Result<Vec<PlacePrediction>, PickerError> {
        let text = PlaceSearchText::try_from(text)
            .map_err(|err| PickerError::Validation(format!("Cannot search for a place: {err}")))?;
        self.places.autocomplete(&text).await.map_err(|err| {
            tracing::error!("Error searching for places: {err:?}");
            PickerError::Network(err)
        })
    }

    #[tracing::instrument(skip(self), level = "info")]
    pub async fn select_place(&self, place_id: &str) -> Result<(), PickerError> {
        let ticket = self.tickets.next();
        let place = match self.places.place_details(place_id).await {
            Ok(place) => place,
            Err(err) => {
                let mut inner = self.inner.lock().await;
                inner.claim_position(ticket);
                inner.claim_address(ticket);
                drop(inner);
                return Err(self.resolution_failed(err));
            }
        };

        let mut inner = self.inner.lock().await;
        inner.apply_position(ticket, place.position);
        inner.apply_address(ticket, place.formatted_address);
        Ok(())
    }

    #[tracing::instrument(skip(self), level = "info")]
    pub async fn locate_me(&self) -> Result<(), PickerError> {
        let ticket = self.tickets.next();
        let position = match self.geolocator.current_position().await {
            Ok(position) => position,
            Err(err) => {
                tracing::warn!("Geolocation failed: {err}");
                self.notices.alert(match err {
                    GeolocationError::Unsupported => notices::GEOLOCATION_UNSUPPORTED,
                    GeolocationError::PermissionDenied | GeolocationError::Unavailable => {
                        notices::LOCATION_DENIED
                    }
                });
                return Err(err.into());
            }
        };

        self.inner.lock().await.apply_position(ticket, position);
        self.resolve_address(ticket, position).await
    }

    #[tracing::instrument(skip(self), level = "info")]
    pub async fn marker_dragged(&self, position: Coordinates) -> Result<(), PickerError> {
        let ticket = self.tickets.next();
        self.inner.lock().await.apply_position(ticket, position);
        self.resolve_address(ticket, position).await
    }

    /// A blank label clears the selection.
    pub async fn select_category(&self, label: &str) {
        self.inner.lock().await.view.category = Category::try_from(label).ok();
    }

    #[tracing::instrument(skip(self), level = "info")]
    pub async fn save(&self) -> Result<AddressRecord, PickerError> {
        let (address, category) = {
            let inner = self.inner.lock().await;
            (inner.view.address.clone(), inner.view.category.clone())
        };
        let address = address.and_then(|address| AddressText::try_from(address).ok());
        let (Some(address), Some(category)) = (address, category) else {
            self.notices.alert(notices::SAVE_PRECONDITION_FAILED);
            return Err(PickerError::Validation(
                notices::SAVE_PRECONDITION_FAILED.to_string(),
            ));
        };

        match self.store.save(address, category).await {
            Ok(record) => {
                self.notices.alert(notices::ADDRESS_SAVED);
                let _ = self.refresh().await;
                Ok(record)
            }
            Err(err) => {
                tracing::error!("Error saving address: {err:?}");
                self.notices.alert(notices::SAVE_FAILED);
                Err(PickerError::Network(err))
            }
        }
    }

    #[tracing::instrument(skip(self), level = "info")]
    pub async fn delete(&self, id: AddressId) -> Result<(), PickerError> {
        if let Err(err) = self.store.delete(id).await {
            tracing::error!("Error deleting address: {err:?}");
            return Err(PickerError::Network(err));
        }
        let _ = self.refresh().await;
        Ok(())
    }

    async fn resolve_address(&self, ticket: Ticket, position: Coordinates) -> Result<(), PickerError> {
        match self.geocoder.formatted_address(position).await {
            Ok(Some(address)) => {
                self.inner.lock().await.apply_address(ticket, address);
                Ok(())
            }
            Ok(None) => {
                self.inner.lock().await.claim_address(ticket);
                Ok(())
            }
            Err(err) => {
                self.inner.lock().await.claim_address(ticket);
                Err(self.resolution_failed(err))
            }
        }
    }

    fn resolution_failed(&self, err: anyhow::Error) -> PickerError {
        tracing::error!("Error fetching address: {err:?}");
        self.notices.alert(notices::ADDRESS_RESOLUTION_FAILED);
        PickerError::Network(err)
    }
}

impl Inner {
    fn apply_position(&mut self, ticket: Ticket, position: Coordinates) {
        if self.position_applied.advance(ticket) {
            self.view.position = position;
        } else {
            tracing::debug!(?ticket, "Dropped stale position");
        }
    }

    /// An empty address still claims the ticket but keeps the shown address.
    fn apply_address(&mut self, ticket: Ticket, address: String) {
        if !self.address_applied.advance(ticket) {
            tracing::debug!(?ticket, "Dropped stale address");
            return;
        }
        if !address.trim().is_empty() {
            self.view.address = Some(address);
        }
    }

    /// Marks `ticket` as the latest resolution without changing what is shown,
    /// so older in-flight results are still dropped.
    fn claim_position(&mut self, ticket: Ticket) {
        self.position_applied.advance(ticket);
    }

    fn claim_address(&mut self, ticket: Ticket) {
        self.address_applied.advance(ticket);
    }
}
