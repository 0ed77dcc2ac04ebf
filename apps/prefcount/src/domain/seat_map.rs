//! Fixed-size map keyed by [`Place`].

use crate::domain::place::Place;
use crate::domain::rules::MAX_PLAYERS;

/// One optional slot per seat; absent entries are `None`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeatMap<T> {
    slots: [Option<T>; MAX_PLAYERS],
}

impl<T> Default for SeatMap<T> {
    fn default() -> Self {
        Self {
            slots: [None, None, None, None],
        }
    }
}

impl<T> SeatMap<T> {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn get(&self, place: Place) -> Option<&T> {
        self.slots[place.index()].as_ref()
    }

    #[inline]
    pub fn get_mut(&mut self, place: Place) -> Option<&mut T> {
        self.slots[place.index()].as_mut()
    }

    /// Stores `value` for `place`, returning the previous entry.
    pub fn insert(&mut self, place: Place, value: T) -> Option<T> {
        self.slots[place.index()].replace(value)
    }

    /// Stores or clears the entry for `place`.
    pub fn set(&mut self, place: Place, value: Option<T>) {
        self.slots[place.index()] = value;
    }

    pub fn clear(&mut self) {
        for slot in &mut self.slots {
            *slot = None;
        }
    }

    pub fn len(&self) -> usize {
        self.slots.iter().filter(|s| s.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(Option::is_none)
    }

    /// Present entries in seat order.
    pub fn iter(&self) -> impl Iterator<Item = (Place, &T)> {
        Place::ALL
            .into_iter()
            .zip(self.slots.iter())
            .filter_map(|(place, slot)| slot.as_ref().map(|v| (place, v)))
    }

    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.slots.iter().flatten()
    }

    pub fn values_mut(&mut self) -> impl Iterator<Item = &mut T> {
        self.slots.iter_mut().flatten()
    }
}

impl<T: Copy> SeatMap<T> {
    /// Copied value for `place`.
    #[inline]
    pub fn value(&self, place: Place) -> Option<T> {
        self.slots[place.index()]
    }
}
