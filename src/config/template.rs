/// Starter `.autocorrect.toml` written by `autocorrect --init`.
pub fn init_template() -> &'static str {
	r#"# autocorrect configuration
#
# Files are looked up from the current directory upwards, then in
# ~/.autocorrect.toml. The nearest file wins for single values.

# Stop looking in parent directories.
# root = true

# Use this file alone, ignoring parents and ~/.autocorrect.toml.
# no-external-lookup = true

# Skip ~/.autocorrect.toml while this environment variable is truthy.
# root-config-lookup-disable-env-var = "CI"

# Content language (quotation marks): "de", "pl".
# language = "pl"

# Wiki database name (project shortcuts): "dewiki", "plwiki".
# wiki = "plwiki"

# Change tag applied once per editing session.
# usage-tag = "ve-autocorrect"

# Extra rule sets: "pl".
# extras = ["pl"]

# Custom rules are tried after the built-in ones, in file order.
#
# [[rules]]
# from = "(tm)"
# to = "™"
#
# [[rules]]
# from = { regex = '(?:^|\s)(x)$' }
# to = "×"
#
# [[rules]]
# start = "=s"
# to = [{ type = "heading", level = 2 }, "See also", { type = "/heading" }]
"#
}
