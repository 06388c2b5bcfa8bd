//! Hand-written test doubles for the contact source and greeting sender.

use contact_greeter::{Contact, ContactSource, GreetingSender};
use std::cell::{Cell, RefCell};

/// Contact source returning a fixed list and counting calls.
#[allow(dead_code)]
#[derive(Default)]
pub struct MockContactSource {
    contacts: Vec<Contact>,
    calls: Cell<usize>,
}

#[allow(dead_code)]
impl MockContactSource {
    pub fn new(contacts: Vec<Contact>) -> Self {
        Self {
            contacts,
            calls: Cell::new(0),
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.get()
    }
}

impl ContactSource for MockContactSource {
    fn get_contacts(&self) -> Vec<Contact> {
        self.calls.set(self.calls.get() + 1);
        self.contacts.clone()
    }
}

/// Greeting sender recording every call.
///
/// Calls for a phone listed with `fail_for` report failure.
#[allow(dead_code)]
#[derive(Default)]
pub struct MockGreetingSender {
    calls: RefCell<Vec<(String, String)>>,
    failing_phones: Vec<String>,
}

#[allow(dead_code)]
impl MockGreetingSender {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fail_for(mut self, phone: &str) -> Self {
        self.failing_phones.push(phone.to_string());
        self
    }

    pub fn calls(&self) -> Vec<(String, String)> {
        self.calls.borrow().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.borrow().len()
    }
}

impl GreetingSender for MockGreetingSender {
    fn send_greeting(&self, contact_name: &str, phone_number: &str) -> bool {
        self.calls
            .borrow_mut()
            .push((contact_name.to_string(), phone_number.to_string()));
        !self.failing_phones.iter().any(|p| p == phone_number)
    }
}
