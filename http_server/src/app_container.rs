use address_book::contracts::AddressBookSubSystem;

pub struct Application {
    pub address_book: AddressBookSubSystem,
}

impl Application {
    pub fn new() -> Self {
        Application {
            address_book: AddressBookSubSystem::new(),
        }
    }
}
