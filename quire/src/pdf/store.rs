use crate::pdf::ObjectId;

/// Append-only registry of serialized object bodies.
///
/// Each body receives a dense, 1-based identity in insertion order.
/// Identities are never reused or reordered; the only mutation after
/// insertion is [`ObjectStore::patch`], which swaps one body wholesale.
#[derive(Debug, Default)]
pub struct ObjectStore {
    bodies: Vec<String>,
}

impl ObjectStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `body` and return its permanent identity.
    pub fn allocate(&mut self, body: String) -> ObjectId {
        self.bodies.push(body);
        ObjectId(self.bodies.len())
    }

    /// Replace the body stored under `id`.
    ///
    /// `id` must come from [`ObjectStore::allocate`] on this store.
    pub fn patch(&mut self, id: ObjectId, body: String) {
        self.bodies[id.0 - 1] = body;
    }

    pub fn get(&self, id: ObjectId) -> Option<&str> {
        self.bodies.get(id.0 - 1).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    /// Snapshot of all objects in identity order.
    pub fn iter(&self) -> impl Iterator<Item = (ObjectId, &str)> {
        self.bodies
            .iter()
            .enumerate()
            .map(|(index, body)| (ObjectId(index + 1), body.as_str()))
    }
}
