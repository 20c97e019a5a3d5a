//! Usage text assembly.
//!
//! The help document is not static: the formats section and the language line
//! are assembled from the renderer and language registries at the moment the
//! text is requested, so newly registered formats show up without touching
//! this module. Composition order is fixed and covered by tests:
//!
//! 1. the mandatory-arguments block with one canonical example,
//! 2. the supported-language line,
//! 3. one block per registered renderer (alias notice or description plus
//!    properties),
//! 4. example invocations for both path-separator conventions.
//!
//! Both the Windows-style and Unix-style example blocks are always emitted,
//! regardless of the host platform, so a single document stays relevant to
//! users on either convention.

use std::fmt::Write as _;

use crate::language::LanguageRegistry;
use crate::renderer::RendererRegistry;

const EOL: &str = "\n";

/// Builds the full usage document for `program_name` from the current
/// catalogs.
///
/// This is a pure function: two calls with unchanged registries yield
/// byte-identical output.
pub fn build_usage_text(
    program_name: &str,
    languages: &LanguageRegistry,
    renderers: &RendererRegistry,
) -> String {
    let mut text = String::new();

    text.push_str(EOL);
    text.push_str("Mandatory arguments:");
    text.push_str(EOL);
    text.push_str("1) A source code filename or directory");
    text.push_str(EOL);
    text.push_str("2) A report format");
    text.push_str(EOL);
    text.push_str("3) A ruleset filename or a comma-delimited string of ruleset filenames");
    text.push_str(EOL);
    text.push_str(EOL);
    text.push_str("For example:");
    text.push_str(EOL);
    let _ = write!(
        text,
        "{} -d c:\\my\\source\\code -f html -R rulesets/quickstart.xml",
        windows_launch_cmd(program_name)
    );
    text.push_str(EOL);
    text.push_str(EOL);

    text.push_str(&supported_languages(languages));
    text.push_str(EOL);

    text.push_str("Available report formats and their configuration properties are:");
    text.push_str(EOL);
    text.push_str(&formats_section(renderers));
    text.push_str(EOL);
    text.push_str(&example_section(program_name));
    text.push_str(EOL);
    text.push_str(EOL);
    text.push_str(EOL);

    text
}

/// The comma-joined list of supported language terse names, in registry
/// iteration order.
fn supported_languages(languages: &LanguageRegistry) -> String {
    let names: Vec<&str> = languages.iter().map(|l| l.terse_name.as_str()).collect();
    format!("Languages and versions supported:{}{}{}", EOL, names.join(", "), EOL)
}

/// One block per registered renderer: alias notice for deprecated names,
/// description plus indented property lines otherwise. An empty registry
/// yields an empty section.
fn formats_section(renderers: &RendererRegistry) -> String {
    let mut buf = String::new();
    for renderer in renderers.iter() {
        let _ = write!(buf, "   {}: ", renderer.name);
        if renderer.is_alias() {
            let _ = write!(buf, "Deprecated alias for '{}'", renderer.display_name);
            buf.push_str(EOL);
            continue;
        }
        buf.push_str(&renderer.description);
        buf.push_str(EOL);

        for property in &renderer.properties {
            let _ = write!(buf, "        {} - {}", property.name, property.description);
            if let Some(default) = &property.default {
                let _ = write!(buf, "   default: {}", default);
            }
            buf.push_str(EOL);
        }
    }
    buf
}

fn example_section(program_name: &str) -> String {
    format!(
        "{}{}",
        windows_examples(program_name),
        unix_examples(program_name)
    )
}

/// The launch command for the Windows convention, prompt included.
fn windows_launch_cmd(program_name: &str) -> String {
    format!(
        "C:\\>{prog}-bin-{version}\\bin\\{prog}.bat",
        prog = program_name,
        version = env!("CARGO_PKG_VERSION")
    )
}

/// The launch command for the Unix convention, prompt included.
fn unix_launch_cmd(program_name: &str) -> String {
    format!(
        "$ {prog}-bin-{version}/bin/{prog}",
        prog = program_name,
        version = env!("CARGO_PKG_VERSION")
    )
}

fn windows_examples(program_name: &str) -> String {
    let launch_cmd = windows_launch_cmd(program_name);
    let code = "c:\\my\\source\\code";
    format!(
        "For example on Windows:{eol}\
         {cmd} -dir {code} -format text -R rulesets/quickstart.xml -version 1.5 -language java -debug{eol}\
         {cmd} -dir {code} -f xml -rulesets rulesets/quickstart.xml,category/codestyle.xml -encoding UTF-8{eol}\
         {cmd} -d {code} -rulesets rulesets/quickstart.xml -auxclasspath lib\\commons-collections.jar;lib\\derby.jar{eol}\
         {cmd} -d {code} -f html -R rulesets/quickstart.xml -auxclasspath file:///C:/my/classpathfile{eol}{eol}",
        cmd = launch_cmd,
        code = code,
        eol = EOL
    )
}

fn unix_examples(program_name: &str) -> String {
    let launch_cmd = unix_launch_cmd(program_name);
    format!(
        "For example on *nix:{eol}\
         {cmd} -dir /home/workspace/src/main/java/code -f html -rulesets rulesets/quickstart.xml,category/codestyle.xml{eol}\
         {cmd} -d ./src/main/java/code -R rulesets/quickstart.xml -f xml -property encoding=UTF-8{eol}\
         {cmd} -d ./src/main/java/code -f html -R rulesets/quickstart.xml -auxclasspath commons-collections.jar:derby.jar{eol}",
        cmd = launch_cmd,
        eol = EOL
    )
}
