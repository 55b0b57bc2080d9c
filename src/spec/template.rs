//! Component image template rendering.
//!
//! Component image names are derived from a small template grammar:
//!
//! - literal text, copied through unchanged
//! - `{{Field}}` - replaced with the field's value
//! - `{{if Field}}...{{end}}` - body included only when the field is non-empty
//!
//! # Example
//!
//! ```
//! use mantle::spec::{ComponentContext, Template};
//!
//! let template = Template::parse("{{Repo}}:{{Tag}}-{{Os}}-{{Arch}}").unwrap();
//! let context = ComponentContext {
//!     repo: "/octocat/hello-world".to_string(),
//!     tag: "latest".to_string(),
//!     os: "linux".to_string(),
//!     arch: "amd64".to_string(),
//!     variant: String::new(),
//! };
//! assert_eq!(
//!     template.render(&context).unwrap(),
//!     "/octocat/hello-world:latest-linux-amd64"
//! );
//! ```

use crate::error::{MantleError, Result};

/// A parsed segment of a component template.
#[derive(Debug, Clone, PartialEq)]
pub enum Segment {
    /// Literal text
    Literal(String),
    /// Field substitution: {{Name}}
    Field(String),
    /// Conditional block included when the field is non-empty.
    Conditional { field: String, body: Vec<Segment> },
}

/// Substitution context for one component image.
#[derive(Debug, Clone, Default)]
pub struct ComponentContext {
    pub repo: String,
    pub tag: String,
    pub os: String,
    pub arch: String,
    pub variant: String,
}

impl ComponentContext {
    /// Resolve a template field name to its value.
    pub fn resolve(&self, name: &str) -> Option<&str> {
        match name {
            "Repo" => Some(&self.repo),
            "Tag" => Some(&self.tag),
            "Os" => Some(&self.os),
            "Arch" => Some(&self.arch),
            "Variant" => Some(&self.variant),
            _ => None,
        }
    }
}

/// A compiled component template, parsed once and rendered per component.
#[derive(Debug, Clone)]
pub struct Template {
    segments: Vec<Segment>,
}

impl Template {
    /// Parse a template string.
    ///
    /// # Errors
    ///
    /// Returns [`MantleError::Template`] on unclosed delimiters, unknown
    /// directives, or unbalanced `if`/`end` blocks.
    pub fn parse(input: &str) -> Result<Self> {
        // Stack of (field, outer segments) for open conditional blocks.
        let mut stack: Vec<(String, Vec<Segment>)> = Vec::new();
        let mut current: Vec<Segment> = Vec::new();
        let mut rest = input;

        while let Some(start) = rest.find("{{") {
            if start > 0 {
                current.push(Segment::Literal(rest[..start].to_string()));
            }
            let after = &rest[start + 2..];
            let Some(end) = after.find("}}") else {
                return Err(MantleError::Template {
                    message: format!("unclosed '{{{{' in template '{}'", input),
                });
            };
            let directive = after[..end].trim();
            rest = &after[end + 2..];

            if let Some(field) = directive.strip_prefix("if ") {
                let field = field.trim();
                if !is_field_name(field) {
                    return Err(MantleError::Template {
                        message: format!("invalid field in '{{{{if {}}}}}'", field),
                    });
                }
                stack.push((field.to_string(), std::mem::take(&mut current)));
            } else if directive == "end" {
                let Some((field, outer)) = stack.pop() else {
                    return Err(MantleError::Template {
                        message: "'{{end}}' without matching '{{if}}'".into(),
                    });
                };
                let body = std::mem::replace(&mut current, outer);
                current.push(Segment::Conditional { field, body });
            } else if is_field_name(directive) {
                current.push(Segment::Field(directive.to_string()));
            } else {
                return Err(MantleError::Template {
                    message: format!("invalid directive '{{{{{}}}}}'", directive),
                });
            }
        }

        if !rest.is_empty() {
            current.push(Segment::Literal(rest.to_string()));
        }
        if let Some((field, _)) = stack.pop() {
            return Err(MantleError::Template {
                message: format!("unterminated '{{{{if {}}}}}' block", field),
            });
        }

        Ok(Self { segments: current })
    }

    /// Render the template against one component's context.
    ///
    /// # Errors
    ///
    /// Returns [`MantleError::Template`] when a field name does not resolve.
    pub fn render(&self, context: &ComponentContext) -> Result<String> {
        let mut out = String::new();
        render_segments(&self.segments, context, &mut out)?;
        Ok(out)
    }
}

fn render_segments(
    segments: &[Segment],
    context: &ComponentContext,
    out: &mut String,
) -> Result<()> {
    for segment in segments {
        match segment {
            Segment::Literal(text) => out.push_str(text),
            Segment::Field(name) => {
                let value = resolve_field(context, name)?;
                out.push_str(value);
            }
            Segment::Conditional { field, body } => {
                let value = resolve_field(context, field)?;
                if !value.is_empty() {
                    render_segments(body, context, out)?;
                }
            }
        }
    }
    Ok(())
}

fn resolve_field<'a>(context: &'a ComponentContext, name: &str) -> Result<&'a str> {
    context.resolve(name).ok_or_else(|| MantleError::Template {
        message: format!("unknown template field '{}'", name),
    })
}

fn is_field_name(name: &str) -> bool {
    !name.is_empty() && name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
}

#[cfg(test)]
mod tests {
    use super::*;

    fn context() -> ComponentContext {
        ComponentContext {
            repo: "/octocat/hello-world".into(),
            tag: "latest".into(),
            os: "linux".into(),
            arch: "arm64".into(),
            variant: "v8".into(),
        }
    }

    #[test]
    fn parses_literal_only() {
        let template = Template::parse("hello world").unwrap();
        assert_eq!(template.render(&context()).unwrap(), "hello world");
    }

    #[test]
    fn parses_empty_template() {
        let template = Template::parse("").unwrap();
        assert_eq!(template.render(&context()).unwrap(), "");
    }

    #[test]
    fn substitutes_single_field() {
        let template = Template::parse("{{Tag}}").unwrap();
        assert_eq!(template.render(&context()).unwrap(), "latest");
    }

    #[test]
    fn substitutes_field_with_surrounding_text() {
        let template = Template::parse("tag: {{Tag}}!").unwrap();
        assert_eq!(template.render(&context()).unwrap(), "tag: latest!");
    }

    #[test]
    fn substitutes_adjacent_fields() {
        let template = Template::parse("{{Os}}{{Arch}}").unwrap();
        assert_eq!(template.render(&context()).unwrap(), "linuxarm64");
    }

    #[test]
    fn tolerates_whitespace_inside_delimiters() {
        let template = Template::parse("{{ Tag }}").unwrap();
        assert_eq!(template.render(&context()).unwrap(), "latest");
    }

    #[test]
    fn conditional_includes_body_when_field_non_empty() {
        let template = Template::parse("{{Arch}}{{if Variant}}-{{Variant}}{{end}}").unwrap();
        assert_eq!(template.render(&context()).unwrap(), "arm64-v8");
    }

    #[test]
    fn conditional_omits_body_when_field_empty() {
        let template = Template::parse("{{Arch}}{{if Variant}}-{{Variant}}{{end}}").unwrap();
        let ctx = ComponentContext {
            variant: String::new(),
            ..context()
        };
        assert_eq!(template.render(&ctx).unwrap(), "arm64");
    }

    #[test]
    fn renders_default_component_template() {
        let template = Template::parse(crate::cli::DEFAULT_COMPONENT_TEMPLATE).unwrap();
        assert_eq!(
            template.render(&context()).unwrap(),
            "/octocat/hello-world:latest-linux-arm64-v8"
        );

        let no_variant = ComponentContext {
            arch: "amd64".into(),
            variant: String::new(),
            ..context()
        };
        assert_eq!(
            template.render(&no_variant).unwrap(),
            "/octocat/hello-world:latest-linux-amd64"
        );
    }

    #[test]
    fn fails_on_unclosed_delimiter() {
        assert!(matches!(
            Template::parse("{{"),
            Err(MantleError::Template { .. })
        ));
        assert!(matches!(
            Template::parse("{{Repo"),
            Err(MantleError::Template { .. })
        ));
    }

    #[test]
    fn fails_on_unknown_directive() {
        assert!(Template::parse("{{Repo.Name}}").is_err());
        assert!(Template::parse("{{.Repo}}").is_err());
    }

    #[test]
    fn fails_on_end_without_if() {
        assert!(Template::parse("{{end}}").is_err());
    }

    #[test]
    fn fails_on_unterminated_if() {
        assert!(Template::parse("{{if Variant}}-{{Variant}}").is_err());
    }

    #[test]
    fn fails_on_if_without_field() {
        assert!(Template::parse("{{if }}x{{end}}").is_err());
    }

    #[test]
    fn render_fails_on_unknown_field() {
        let template = Template::parse("{{Unknown}}").unwrap();
        assert!(matches!(
            template.render(&context()),
            Err(MantleError::Template { .. })
        ));
    }

    #[test]
    fn render_fails_on_unknown_field_in_conditional() {
        let template = Template::parse("{{if Unknown}}x{{end}}").unwrap();
        assert!(template.render(&context()).is_err());
    }

    #[test]
    fn parse_is_reusable_across_contexts() {
        let template = Template::parse("{{Tag}}-{{Os}}").unwrap();
        assert_eq!(template.render(&context()).unwrap(), "latest-linux");

        let other = ComponentContext {
            tag: "v1.0".into(),
            os: "linux".into(),
            ..Default::default()
        };
        assert_eq!(template.render(&other).unwrap(), "v1.0-linux");
    }
}
