use crate::command::CommandSpec;

/// Default setup commands run against a freshly generated project, in
/// execution order. Formatters come first so that nothing later flags
/// unformatted output; every entry is best-effort and may be absent on
/// the host running the generator.
pub fn setup_commands() -> Vec<CommandSpec> {
    vec![
        CommandSpec::new("black", [".", "--quiet"]),
        CommandSpec::new("isort", [".", "--quiet"]),
        CommandSpec::new(
            "prettier",
            [".", "--write", "--ignore-unknown", "--log-level=silent"],
        ),
    ]
}
