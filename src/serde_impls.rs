use std::fmt;
use std::marker::PhantomData;

use serde::de::{Deserialize, Deserializer, SeqAccess, Visitor};
use serde::ser::{Serialize, SerializeSeq, Serializer};

use crate::bimap::BiMap;
use crate::index::IndexType;
use crate::order::Comparator;

/// The map serializes as a sequence of `(left, right)` entries in
/// ascending left order.
impl<L, R, Cl, Cr, Ix> Serialize for BiMap<L, R, Cl, Cr, Ix>
where
    L: Serialize,
    R: Serialize,
    Ix: IndexType,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut seq = serializer.serialize_seq(Some(self.len()))?;
        for entry in self.iter() {
            seq.serialize_element(&entry)?;
        }
        seq.end()
    }
}

struct EntriesVisitor<L, R, Cl, Cr, Ix> {
    marker: PhantomData<BiMap<L, R, Cl, Cr, Ix>>,
}

impl<'de, L, R, Cl, Cr, Ix> Visitor<'de> for EntriesVisitor<L, R, Cl, Cr, Ix>
where
    L: Deserialize<'de>,
    R: Deserialize<'de>,
    Cl: Comparator<L> + Default,
    Cr: Comparator<R> + Default,
    Ix: IndexType,
{
    type Value = BiMap<L, R, Cl, Cr, Ix>;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("a sequence of key pairs")
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
    where
        A: SeqAccess<'de>,
    {
        let mut map = BiMap::with_comparators(Cl::default(), Cr::default());
        while let Some((left, right)) = seq.next_element()? {
            let _ignore = map.insert(left, right);
        }
        Ok(map)
    }
}

/// Entries whose left or right value was already taken are dropped, the
/// same way repeated inserts would be.
impl<'de, L, R, Cl, Cr, Ix> Deserialize<'de> for BiMap<L, R, Cl, Cr, Ix>
where
    L: Deserialize<'de>,
    R: Deserialize<'de>,
    Cl: Comparator<L> + Default,
    Cr: Comparator<R> + Default,
    Ix: IndexType,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_seq(EntriesVisitor {
            marker: PhantomData,
        })
    }
}
