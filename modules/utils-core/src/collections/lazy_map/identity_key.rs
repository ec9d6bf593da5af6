
use alloc::rc::Rc;
#[cfg(target_has_atomic = "ptr")]
use alloc::sync::Arc;

/// Key whose identity is the shared allocation it points into.
///
/// Every `Rc::new` or `Arc::new` call produces an allocation that also holds the reference
/// counts, so two separately created handles never share an address, even when the value is
/// zero-sized or empty. Clones of one handle share it. Pointers without such an allocation
/// (`Box<()>`, `&()`, an empty `String`) may all report the same dangling address and are
/// therefore not identity keys.
pub trait IdentityKey {
  /// Returns the address of the allocation this key points into.
  fn identity(&self) -> usize;
}

impl<T: ?Sized> IdentityKey for Rc<T> {
  fn identity(&self) -> usize {
    Rc::as_ptr(self).cast::<()>() as usize
  }
}

#[cfg(target_has_atomic = "ptr")]
impl<T: ?Sized> IdentityKey for Arc<T> {
  fn identity(&self) -> usize {
    Arc::as_ptr(self).cast::<()>() as usize
  }
}
