//! Cross-thread locks on physical displays.
//!
//! One monitor can be reachable through more than one path, so the lock is
//! keyed on the physical display rather than on the bus handle. Each lock
//! record collects every bus and EDID identity it was reached through; an id
//! joins the record owning its bus, or failing that the record carrying its
//! EDID. A bus belongs to at most one record. Records are kept for the life
//! of the registry.

use std::collections::BTreeSet;
use std::fmt;
use std::sync::{Arc, Condvar, Mutex, MutexGuard, PoisonError};
use std::thread::{self, ThreadId};
use log::{debug, trace};
use crate::Error;

/// Manufacturer, model and serial number from a display's EDID.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EdidIdentity {
    /// Three letter PNP manufacturer id
    pub manufacturer: String,
    /// Model name
    pub model: String,
    /// Serial number string
    pub serial: String,
}

/// Identifies the physical display behind a connection.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DisplayId {
    /// I2C bus number, as in `/dev/i2c-N`
    pub bus: u32,
    /// EDID identity if it was read
    pub edid: Option<EdidIdentity>,
}

impl DisplayId {
    /// A display known only by its bus.
    pub fn bus(bus: u32) -> Self {
        DisplayId {
            bus: bus,
            edid: None,
        }
    }

    /// A display on `bus` with the given EDID identity.
    pub fn with_edid(bus: u32, edid: EdidIdentity) -> Self {
        DisplayId {
            bus: bus,
            edid: Some(edid),
        }
    }

}

impl fmt::Display for DisplayId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "bus /dev/i2c-{}", self.bus)?;
        if let Some(ref edid) = self.edid {
            write!(f, " ({} {} {})", edid.manufacturer, edid.model, edid.serial)?;
        }
        Ok(())
    }
}

/// How [`DisplayRegistry::lock`] behaves when another thread holds the lock.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum LockMode {
    /// Block until the lock is released
    Wait,
    /// Return [`Error::Busy`] immediately
    FailFast,
}

/// Lock record of one physical display.
#[derive(Debug)]
pub struct DistinctDisplay {
    id: DisplayId,
    owner: Mutex<Option<ThreadId>>,
    released: Condvar,
}

impl DistinctDisplay {
    fn new(id: DisplayId) -> Self {
        DistinctDisplay {
            id: id,
            owner: Mutex::new(None),
            released: Condvar::new(),
        }
    }

    /// The id the record was first registered with.
    pub fn id(&self) -> &DisplayId {
        &self.id
    }

    fn owner(&self) -> MutexGuard<Option<ThreadId>> {
        self.owner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Whether some thread currently holds the lock.
    pub fn is_locked(&self) -> bool {
        self.owner().is_some()
    }

    fn acquire(&self, mode: LockMode) -> Result<(), Error> {
        let current = thread::current().id();
        let mut owner = self.owner();
        loop {
            match *owner {
                None => {
                    *owner = Some(current);
                    return Ok(())
                },
                Some(holder) if holder == current => return Err(Error::AlreadyLocked),
                Some(_) => match mode {
                    LockMode::FailFast => return Err(Error::Busy),
                    LockMode::Wait => {
                        trace!("waiting for {}", self.id);
                        owner = self.released.wait(owner).unwrap_or_else(PoisonError::into_inner);
                    },
                },
            }
        }
    }

    fn release(&self) {
        *self.owner() = None;
        self.released.notify_one();
    }
}

/// Paths a lock record has been reached through.
#[derive(Debug)]
struct Aliases {
    buses: BTreeSet<u32>,
    edids: Vec<EdidIdentity>,
    display: Arc<DistinctDisplay>,
}

impl Aliases {
    fn has_edid(&self, edid: Option<&EdidIdentity>) -> bool {
        edid.map(|edid| self.edids.contains(edid)).unwrap_or(false)
    }
}

/// Every physical display seen by the process.
#[derive(Debug, Default)]
pub struct DisplayRegistry {
    displays: Mutex<Vec<Aliases>>,
}

impl DisplayRegistry {
    /// An empty registry.
    pub fn new() -> Self {
        Default::default()
    }

    /// The lock record for `id`, registering one if the display is new.
    ///
    /// The bus decides first. An EDID seen with a bus that already has a
    /// record is added to that record unless another record carries it.
    pub fn get_or_register(&self, id: &DisplayId) -> Arc<DistinctDisplay> {
        let mut displays = self.displays.lock().unwrap_or_else(PoisonError::into_inner);
        let edid = id.edid.as_ref();

        if let Some(idx) = displays.iter().position(|d| d.buses.contains(&id.bus)) {
            if let Some(edid) = edid {
                let claimed = displays.iter().any(|d| d.edids.contains(edid));
                if !claimed {
                    debug!("{} is also known as {} {} {}", displays[idx].display.id, edid.manufacturer, edid.model, edid.serial);
                    displays[idx].edids.push(edid.clone());
                }
            }
            return displays[idx].display.clone()
        }

        if let Some(aliases) = displays.iter_mut().find(|d| d.has_edid(edid)) {
            debug!("{} is also reachable on /dev/i2c-{}", aliases.display.id, id.bus);
            aliases.buses.insert(id.bus);
            return aliases.display.clone()
        }

        debug!("registering distinct display {}", id);
        let display = Arc::new(DistinctDisplay::new(id.clone()));
        displays.push(Aliases {
            buses: Some(id.bus).into_iter().collect(),
            edids: edid.cloned().into_iter().collect(),
            display: display.clone(),
        });
        display
    }

    /// Buses through which the display named by `id` has been reached,
    /// empty if it was never registered.
    pub fn buses(&self, id: &DisplayId) -> Vec<u32> {
        let displays = self.displays.lock().unwrap_or_else(PoisonError::into_inner);
        displays.iter()
            .find(|d| d.buses.contains(&id.bus))
            .or_else(|| displays.iter().find(|d| d.has_edid(id.edid.as_ref())))
            .map(|d| d.buses.iter().cloned().collect())
            .unwrap_or_default()
    }

    /// Number of distinct displays registered.
    pub fn len(&self) -> usize {
        self.displays.lock().unwrap_or_else(PoisonError::into_inner).len()
    }

    /// Whether no display has been registered.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Takes the lock on the display named by `id`.
    ///
    /// Fails with [`Error::AlreadyLocked`] if the calling thread already
    /// holds it, and with [`Error::Busy`] in [`LockMode::FailFast`] if
    /// another thread does.
    pub fn lock(&self, id: &DisplayId, mode: LockMode) -> Result<DisplayLockGuard, Error> {
        let display = self.get_or_register(id);
        display.acquire(mode)?;
        trace!("locked {}", display.id);
        Ok(DisplayLockGuard {
            display: display,
        })
    }
}

/// Holds a display lock until dropped.
#[derive(Debug)]
pub struct DisplayLockGuard {
    display: Arc<DistinctDisplay>,
}

impl DisplayLockGuard {
    /// The locked display.
    pub fn display(&self) -> &DisplayId {
        &self.display.id
    }

    /// Releases the lock.
    pub fn unlock(self) { }
}

impl Drop for DisplayLockGuard {
    fn drop(&mut self) {
        trace!("unlocking {}", self.display.id);
        self.display.release();
    }
}
