/// Builds the nested type list of a catalog from case marker types.
///
/// The definition-side companion is [`cases!`](crate::cases), which also
/// defines the markers themselves.
///
/// ```rust
/// use asenum::{AsEnum, Assoc, Cases, EnumCase, Unit};
///
/// #[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// enum Io {
///     Ready,
///     Blocked,
/// }
///
/// struct Ready;
/// impl EnumCase for Ready {
///     type Enum = Io;
///     type Kind = Assoc<usize>;
///     const CASE: Io = Io::Ready;
/// }
///
/// struct Blocked;
/// impl EnumCase for Blocked {
///     type Enum = Io;
///     type Kind = Unit;
///     const CASE: Io = Io::Blocked;
/// }
///
/// type IoEvent = AsEnum<Cases![Ready, Blocked]>;
/// let event = IoEvent::create(Ready, 16);
/// assert_eq!(event.get(Ready), Some(&16));
/// ```
#[macro_export]
macro_rules! Cases {
    [] => [()];
    [$head:ty $(, $t:ty)* $(,)?] => [($head, $crate::Cases![$($t),*])];
}

/// Defines a catalog: one zero-sized marker per case, its [`EnumCase`]
/// impl, and an [`AsEnum`] type alias over the resulting case list.
///
/// Entries associate a variant of an existing enumeration with a payload
/// type (`Variant => Type`) or declare it void (bare `Variant`), in the
/// order that [`all_cases`](crate::AsEnum::all_cases) reports.
///
/// ```rust
/// use asenum::cases;
///
/// #[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// enum Health {
///     Hurt,
///     Dead,
/// }
///
/// cases! {
///     type Status = Health {
///         Hurt => u32,
///         Dead,
///     }
/// }
///
/// let status = Status::create(Hurt, 20);
/// assert!(status.is_case(Hurt));
/// assert!(!status.is_case(Dead));
/// ```
///
/// Listing the same variant twice defines two markers with one name and is
/// rejected:
///
/// ```compile_fail
/// #[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// enum Health { Hurt, Dead }
///
/// asenum::cases! {
///     type Broken = Health {
///         Hurt => u32,
///         Hurt => i64,
///     }
/// }
/// ```
///
/// [`EnumCase`]: crate::EnumCase
/// [`AsEnum`]: crate::AsEnum
#[macro_export]
macro_rules! cases {
    (
        $(#[$meta:meta])*
        $vis:vis type $name:ident = $enum:ty { $($body:tt)* } $(;)?
    ) => {
        $crate::cases!(@case [$(#[$meta])*] [$vis] [$name] [$enum] [] $($body)*);
    };

    // associated case
    (@case $meta:tt [$vis:vis] $name:tt [$enum:ty] [$($acc:ident)*]
        $case:ident => $payload:ty, $($rest:tt)*
    ) => {
        #[derive(Debug, Clone, Copy)]
        $vis struct $case;

        impl $crate::EnumCase for $case {
            type Enum = $enum;
            type Kind = $crate::Assoc<$payload>;
            const CASE: $enum = <$enum>::$case;
        }

        $crate::cases!(@case $meta [$vis] $name [$enum] [$($acc)* $case] $($rest)*);
    };
    (@case $meta:tt [$vis:vis] $name:tt [$enum:ty] [$($acc:ident)*]
        $case:ident => $payload:ty
    ) => {
        $crate::cases!(@case $meta [$vis] $name [$enum] [$($acc)*] $case => $payload,);
    };

    // void case
    (@case $meta:tt [$vis:vis] $name:tt [$enum:ty] [$($acc:ident)*]
        $case:ident, $($rest:tt)*
    ) => {
        #[derive(Debug, Clone, Copy)]
        $vis struct $case;

        impl $crate::EnumCase for $case {
            type Enum = $enum;
            type Kind = $crate::Unit;
            const CASE: $enum = <$enum>::$case;
        }

        $crate::cases!(@case $meta [$vis] $name [$enum] [$($acc)* $case] $($rest)*);
    };
    (@case $meta:tt [$vis:vis] $name:tt [$enum:ty] [$($acc:ident)*]
        $case:ident
    ) => {
        $crate::cases!(@case $meta [$vis] $name [$enum] [$($acc)*] $case,);
    };

    // every case consumed; emit the alias
    (@case [$(#[$meta:meta])*] [$vis:vis] [$name:ident] [$enum:ty] [$($acc:ident)*]) => {
        $(#[$meta])*
        $vis type $name = $crate::AsEnum<$crate::Cases![$($acc),*]>;
    };
}
