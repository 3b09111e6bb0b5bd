//! Macros for ergonomic configuration construction.

/// Build a [`MachineConfig`](crate::config::MachineConfig) from a literal
/// description.
///
/// States and their transitions keep the order they are written in.
///
/// # Example
///
/// ```
/// use waypoint::machine_config;
///
/// let config = machine_config! {
///     initial: "normal",
///     states: {
///         "normal" => { "pause" => "busy" },
///         "busy" => { "resume" => "normal" },
///         "done" => {},
///     }
/// };
///
/// assert_eq!(config.initial(), "normal");
/// assert_eq!(config.state_names(), vec!["normal", "busy", "done"]);
/// ```
#[macro_export]
macro_rules! machine_config {
    (
        initial: $initial:expr,
        states: {
            $(
                $state:expr => { $( $event:expr => $target:expr ),* $(,)? }
            ),* $(,)?
        } $(,)?
    ) => {{
        let config = $crate::config::MachineConfig::new($initial);
        $(
            let config = config.with_state(
                $state,
                $crate::core::StateDef::new() $( .on($event, $target) )*,
            );
        )*
        config
    }};
}
