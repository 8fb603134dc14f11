macro_rules! enum_sim {
    (
        $(#[$enum_attr: meta])*
        pub struct $tname:ident ($size_t:ty) {
            $(
                $(#[$arm_attr: meta])*
                $enum_arm:ident = $num_exp:expr => $label:expr
            ),+ $(,)?
        }
    ) => {
        #[derive(Debug, Hash, PartialEq, Eq, PartialOrd, Ord, Clone, Copy)]
        $(#[$enum_attr])*
        pub struct $tname($size_t);

        impl $tname {
            $(
                $(#[$arm_attr])*
                pub const $enum_arm: Self = Self($num_exp);
            )+

            /// Get the raw value.
            #[inline]
            pub fn raw(&self) -> $size_t {
                self.0
            }

            /// Get the display name, or `None` if the raw value is not a known one.
            pub fn name(&self) -> Option<&'static str> {
                match self.0 {
                    $(
                        v if v == $num_exp => Some($label),
                    )+
                    _ => None,
                }
            }
        }

        impl ::core::convert::From<$size_t> for $tname {
            #[inline]
            fn from(value: $size_t) -> $tname {
                $tname(value)
            }
        }

        impl ::core::convert::From<$tname> for $size_t {
            #[inline]
            fn from(value: $tname) -> $size_t {
                value.0
            }
        }

        impl ::core::convert::From<$tname> for $crate::tree::FieldValue {
            #[inline]
            fn from(value: $tname) -> $crate::tree::FieldValue {
                $crate::tree::FieldValue::Enum {
                    raw: value.0 as u64,
                    name: value.name(),
                }
            }
        }

        impl ::core::fmt::Display for $tname {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                match self.name() {
                    Some(name) => f.write_str(name),
                    None => write!(f, "Unknown ({:#x})", self.0),
                }
            }
        }
    };
}
