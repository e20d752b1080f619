/// Declares a wire record: the struct itself plus [`WireRead`] and
/// [`WireWrite`] impls that decode and encode its fields strictly in
/// declaration order.
///
/// [`WireRead`]: crate::net_io::WireRead
/// [`WireWrite`]: crate::net_io::WireWrite
#[macro_export]
macro_rules! wire_struct {
    ($(
    $(#[$meta:meta])*
    $name:ident {
        $(
        $(#[$field_meta:meta])*
        $field:ident: $ty:ty
        ),* $(,)?
    }
    );* $(;)?) => {
        $(
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
        #[serde(rename_all = "camelCase")]
        pub struct $name {
            $(
            $(#[$field_meta])*
            pub $field: $ty
            ),*
        }

        impl $crate::net_io::WireRead for $name {
            fn wire_read(
                reader: &mut $crate::net_io::PacketReader<'_>,
            ) -> Result<Self, $crate::error::QueryError> {
                $(
                let $field = <$ty as $crate::net_io::WireRead>::wire_read(reader)?;
                )*
                Ok(Self {
                    $($field),*
                })
            }
        }

        impl $crate::net_io::WireWrite for $name {
            fn wire_write(
                &self,
                buffer: &mut Vec<u8>,
            ) -> Result<(), $crate::error::QueryError> {
                $(
                self.$field.wire_write(buffer)?;
                )*
                Ok(())
            }
        }
        )*
    };
}
