//! Identifier newtypes. Each entity kind has its own key type so that an
//! organization id can never be passed where a user or invite id is expected,
//! and likewise for the UUID keyed robots, teams and tokens.

use std::fmt::Display;
use std::fmt::Formatter;
use std::str::FromStr;

use serde::Deserialize;
use serde::Serialize;
use uuid::Uuid;

macro_rules! define_id {
    ($(#[$meta:meta])* $name:ident($inner:ty)) => {
        $(#[$meta])*
        #[derive(
            Serialize, Deserialize, Debug, Default, Clone, Copy,
            PartialEq, Eq, Hash, PartialOrd, Ord,
        )]
        #[serde(transparent)]
        pub struct $name(pub $inner);

        impl $name {
            pub fn into_inner(self) -> $inner {
                self.0
            }
        }

        impl From<$inner> for $name {
            fn from(value: $inner) -> Self {
                $name(value)
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl FromStr for $name {
            type Err = <$inner as FromStr>::Err;

            fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
                Ok($name(s.parse()?))
            }
        }
    };
}

define_id!(
    /// Numeric key of an organization.
    OrganizationId(u64)
);
define_id!(
    /// Numeric key of a user account.
    UserId(u64)
);
define_id!(
    /// Numeric key of a pending organization invite.
    InviteId(u64)
);
define_id!(RobotId(Uuid));
define_id!(TeamId(Uuid));
define_id!(TokenId(Uuid));

impl RobotId {
    pub fn new_v4() -> Self {
        RobotId(Uuid::new_v4())
    }
}

impl TeamId {
    pub fn new_v4() -> Self {
        TeamId(Uuid::new_v4())
    }
}

impl TokenId {
    pub fn new_v4() -> Self {
        TokenId(Uuid::new_v4())
    }
}
