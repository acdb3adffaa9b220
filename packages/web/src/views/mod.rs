mod guests;
pub use guests::Guests;

mod guest_detail;
pub use guest_detail::GuestDetail;

mod add_guest;
pub use add_guest::AddGuest;

pub(crate) fn make_store() -> impl store::RecordStore + Clone + 'static {
    let config = store::StoreConfig::from_env();
    store::HttpStore::new(&config.endpoint, &config.collection)
}
