/// Declares a newtype over `u64` used as a record identifier.
///
/// The generated type serializes as a bare JSON number so it can travel in
/// path segments and response bodies unchanged.
#[macro_export]
macro_rules! numeric_key {
    ($TypeName: ident) => {
        #[derive(
            Clone,
            Copy,
            Debug,
            Default,
            Eq,
            Hash,
            Ord,
            PartialEq,
            PartialOrd,
            serde::Serialize,
            serde::Deserialize,
        )]
        #[serde(transparent)]
        pub struct $TypeName(u64);

        impl $TypeName {
            pub fn new(value: u64) -> Self {
                $TypeName(value)
            }

            pub fn inner(&self) -> u64 {
                self.0
            }
        }

        impl PartialEq<u64> for $TypeName {
            fn eq(&self, other: &u64) -> bool {
                self.inner() == *other
            }
        }

        impl std::fmt::Display for $TypeName {
            fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
                self.0.fmt(f)
            }
        }

        impl std::str::FromStr for $TypeName {
            type Err = std::num::ParseIntError;

            fn from_str(value: &str) -> Result<Self, Self::Err> {
                value.trim().parse::<u64>().map($TypeName)
            }
        }

        impl From<u64> for $TypeName {
            fn from(id: u64) -> Self {
                $TypeName(id)
            }
        }

        impl From<$TypeName> for u64 {
            fn from(id: $TypeName) -> Self {
                id.inner()
            }
        }
    };
}
