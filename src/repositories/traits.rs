use crate::models::Contact;

/// Source of contacts ready to be greeted.
///
/// Implementations never fail: every contact returned has passed both the
/// name and the phone validators, and an unreachable backend yields an
/// empty list.
pub trait ContactSource {
    /// Retrieve every valid contact, in backend order.
    fn get_contacts(&self) -> Vec<Contact>;
}

impl<T: ContactSource + ?Sized> ContactSource for &T {
    fn get_contacts(&self) -> Vec<Contact> {
        (**self).get_contacts()
    }
}
