macro_rules! id {
    ($ident:ident) => {
        #[::nutype::nutype(derive(
            Debug,
            Clone,
            Copy,
            PartialEq,
            Eq,
            PartialOrd,
            Ord,
            Hash,
            Deref,
            From,
            Serialize,
            Deserialize,
        ))]
        pub struct $ident(::uuid::Uuid);
    };
}

macro_rules! nutype_string {
    ($ident:ident ( $( $tt:tt )* )) => {
        #[::nutype::nutype(
            $( $tt )*
            derive(
                Debug,
                Clone,
                PartialEq,
                Eq,
                PartialOrd,
                Ord,
                Hash,
                TryFrom,
                Deref,
                Serialize,
                Deserialize,
            )
        )]
        pub struct $ident(String);
    };
}

pub(crate) use {id, nutype_string};
