//! Document identifiers.
//!
//! Identifiers are 12 bytes rendered as 24 hex characters: a 4-byte
//! big-endian creation timestamp (seconds), 5 random bytes fixed per process,
//! and a 3-byte counter. Only the rendered shape is validated on input; any
//! 24-character hex string is a well-formed identifier.

use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;
use std::sync::atomic::{AtomicU32, Ordering};

use chrono::{DateTime, Utc};
use rand::RngCore;
use serde::{Deserialize, Serialize};

/// Length of the binary identifier.
const OBJECT_ID_LEN: usize = 12;

/// Length of the rendered identifier.
pub const OBJECT_ID_HEX_LEN: usize = OBJECT_ID_LEN * 2;

const COUNTER_MASK: u32 = 0x00ff_ffff;

/// Reasons a string is not a well-formed [`ObjectId`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObjectIdError {
    InvalidLength { length: usize },
    InvalidHex,
}

impl fmt::Display for ObjectIdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength { length } => write!(
                f,
                "identifier must be {OBJECT_ID_HEX_LEN} characters long, got {length}"
            ),
            Self::InvalidHex => write!(f, "identifier must contain only hex digits"),
        }
    }
}

impl std::error::Error for ObjectIdError {}

struct ProcessComponent {
    random: [u8; 5],
    counter: AtomicU32,
}

fn process_component() -> &'static ProcessComponent {
    static COMPONENT: OnceLock<ProcessComponent> = OnceLock::new();
    COMPONENT.get_or_init(|| {
        let mut rng = rand::thread_rng();
        let mut random = [0_u8; 5];
        rng.fill_bytes(&mut random);
        ProcessComponent {
            random,
            counter: AtomicU32::new(rng.next_u32() & COUNTER_MASK),
        }
    })
}

/// Identifier of a stored document.
///
/// # Examples
/// ```
/// use taskboard::domain::ObjectId;
///
/// let id = ObjectId::parse("65a1f0c2e4b0a1b2c3d4e5f6").expect("well-formed");
/// assert_eq!(id.to_string(), "65a1f0c2e4b0a1b2c3d4e5f6");
/// assert!(ObjectId::parse("not-an-id").is_err());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ObjectId([u8; OBJECT_ID_LEN]);

impl ObjectId {
    /// Mint a new identifier for the current instant.
    #[must_use]
    pub fn generate() -> Self {
        Self::generate_at(Utc::now())
    }

    fn generate_at(now: DateTime<Utc>) -> Self {
        let component = process_component();
        let seconds = u32::try_from(now.timestamp().max(0)).unwrap_or(u32::MAX);
        let count = component.counter.fetch_add(1, Ordering::Relaxed) & COUNTER_MASK;

        let mut bytes = [0_u8; OBJECT_ID_LEN];
        let (timestamp, rest) = bytes.split_at_mut(4);
        let (random, counter) = rest.split_at_mut(5);
        timestamp.copy_from_slice(&seconds.to_be_bytes());
        random.copy_from_slice(&component.random);
        let [_, high, mid, low] = count.to_be_bytes();
        counter.copy_from_slice(&[high, mid, low]);
        Self(bytes)
    }

    /// Parse the 24-character hex rendering.
    pub fn parse(raw: &str) -> Result<Self, ObjectIdError> {
        if raw.len() != OBJECT_ID_HEX_LEN {
            return Err(ObjectIdError::InvalidLength { length: raw.len() });
        }
        let mut bytes = [0_u8; OBJECT_ID_LEN];
        hex::decode_to_slice(raw, &mut bytes).map_err(|_| ObjectIdError::InvalidHex)?;
        Ok(Self(bytes))
    }

}

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&hex::encode(self.0))
    }
}

impl fmt::Debug for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ObjectId({self})")
    }
}

impl FromStr for ObjectId {
    type Err = ObjectIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for ObjectId {
    type Error = ObjectIdError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<ObjectId> for String {
    fn from(value: ObjectId) -> Self {
        value.to_string()
    }
}
