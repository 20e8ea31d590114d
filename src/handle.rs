use std::any::Any;
use std::fmt;

use uuid::Uuid;

use crate::ObjectId;

/// Weak, non-owning reference to a toolkit window.
///
/// The bridge only transports window references, it never dereferences
/// them. The consumer validates liveness against its window
/// [`Arena`](crate::Arena) before use, since the window may have been
/// destroyed between enqueue and dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct WindowRef(ObjectId);

impl WindowRef {
    /// The underlying arena identifier.
    pub fn id(self) -> ObjectId {
        self.0
    }
}

impl From<ObjectId> for WindowRef {
    fn from(id: ObjectId) -> Self {
        WindowRef(id)
    }
}

impl fmt::Display for WindowRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "window:{}", self.0)
    }
}

/// Weak, non-owning reference to a toolkit scroll bar.
///
/// Same validation rules as [`WindowRef`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ScrollBarRef(ObjectId);

impl ScrollBarRef {
    /// The underlying arena identifier.
    pub fn id(self) -> ObjectId {
        self.0
    }
}

impl From<ObjectId> for ScrollBarRef {
    fn from(id: ObjectId) -> Self {
        ScrollBarRef(id)
    }
}

impl fmt::Display for ScrollBarRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "scrollbar:{}", self.0)
    }
}

/// Unique identity of a [`MessageHandle`] (UUID v4, not monotonic).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct HandleId(u128);

impl HandleId {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self(Uuid::new_v4().as_u128())
    }

    pub fn value(&self) -> u128 {
        self.0
    }
}

impl fmt::Display for HandleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", Uuid::from_u128(self.0))
    }
}

/// Owned, opaque payload transferred through an event.
///
/// Drag-and-drop, menu-select, menu-help and file-panel events carry data
/// allocated by the producer. Ownership moves into the envelope at write
/// time and out to the handler at read time; there is never a shared or
/// aliased copy in flight. The handler either keeps the handle or drops
/// it, releasing the payload.
///
/// The payload type is erased; the consumer recovers it with
/// [`downcast`](Self::downcast):
///
/// ```rust
/// use eventport::MessageHandle;
///
/// struct DroppedFiles(Vec<String>);
///
/// let handle = MessageHandle::new(DroppedFiles(vec!["/tmp/a".into()]));
/// let files = handle.downcast::<DroppedFiles>().expect("wrong payload type");
/// assert_eq!(files.0.len(), 1);
/// ```
pub struct MessageHandle {
    id: HandleId,
    payload: Box<dyn Any + Send>,
}

impl MessageHandle {
    /// Wrap a producer-allocated payload, assigning it a fresh identity.
    pub fn new(payload: impl Any + Send) -> Self {
        Self {
            id: HandleId::new(),
            payload: Box::new(payload),
        }
    }

    /// Unique identity of this handle, stable across the transfer.
    pub fn id(&self) -> HandleId {
        self.id
    }

    /// Take ownership of the payload as its concrete type.
    ///
    /// On a type mismatch the handle is returned intact so the caller can
    /// try another type or log its id.
    pub fn downcast<T: Any>(self) -> Result<Box<T>, MessageHandle> {
        let id = self.id;
        self.payload
            .downcast::<T>()
            .map_err(|payload| MessageHandle { id, payload })
    }

    /// Borrow the payload as its concrete type without consuming the handle.
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.payload.downcast_ref::<T>()
    }
}

// Equality is by identity: the payload is opaque.
impl PartialEq for MessageHandle {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for MessageHandle {}

impl fmt::Debug for MessageHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MessageHandle")
            .field("id", &self.id.to_string())
            .finish_non_exhaustive()
    }
}
