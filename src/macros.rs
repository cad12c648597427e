#[macro_export]
macro_rules! regex {
    ($pat:literal) => {{
        static RE: once_cell::sync::Lazy<regex::Regex> =
            once_cell::sync::Lazy::new(|| regex::Regex::new($pat).unwrap());
        &*RE
    }};
}

#[macro_export]
macro_rules! rule {
    (@policy) => {
        $crate::MatchPolicy::Stop
    };
    (@policy $policy:ident) => {
        $crate::MatchPolicy::$policy
    };
    (
        name: $name:expr,
        pattern: $pat:literal
        $(, policy: $policy:ident)?
        , action: |$caps:ident, $state:ident| $body:block
        $(,)?
    ) => {{
        $crate::Rule {
            name: $name,
            pattern: $crate::regex!($pat),
            policy: $crate::rule!(@policy $($policy)?),
            action: $crate::action(move |$caps, $state| {
                #[allow(unused_imports)]
                use $crate::CapturesExt;
                $body
            }),
        }
    }};
}
