//! # Descriptor Linter Module
//!
//! Reports problems in HTTP annotations without stopping at the first one.
//! Where planning aborts a file on its first error, the linter walks every
//! binding and collects everything it finds.
//!
//! ## Checks Performed
//!
//! 1. **empty_template** - a verb with an empty path (Error)
//! 2. **invalid_http_rule** - several verbs set, or a bad custom verb (Error)
//! 3. **binding_mismatch** - route parameter whose field is not bound to the URI (Error)
//! 4. **unbound_field** - no-body method with a field bound nowhere (Error)
//!    and **duplicate_uri_field** - two fields claiming one route parameter (Error)
//! 5. **unrecognized_template_fragment** - `{...}` the compiler copies verbatim (Warning)
//! 6. **unbound_route_param** - route parameter with no input field (Warning)
//! 7. **duplicate_route** - same verb and router path twice in one file (Warning)
//! 8. **missing_http_rule** - method not exposed over HTTP (Warning)
//! 9. **dropped_literal_capture** - `{name=literal}` never captures `name` (Info)
//!
//! ## Usage
//!
//! ```rust,ignore
//! use protoroute::linter::{lint_descriptor, print_lint_issues};
//!
//! let issues = lint_descriptor(&set, &planner);
//! print_lint_issues(&issues);
//! ```

use crate::descriptor::{DescriptorSet, FileDescriptor, HttpRule};
use crate::plan::{MethodContext, Planner};
use crate::template::{compile, sanitize_param_name, ParamTable, Segment};
use http::Method;
use std::collections::HashSet;
use std::fmt;


/// Severity level for lint issues
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LintSeverity {
    /// Error - Will cause generation to fail
    Error,
    /// Warning - Generates, but probably not what was meant
    Warning,
    /// Info - Worth knowing
    Info,
}

impl fmt::Display for LintSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LintSeverity::Error => write!(f, "error"),
            LintSeverity::Warning => write!(f, "warning"),
            LintSeverity::Info => write!(f, "info"),
        }
    }
}

/// A lint issue found in a descriptor
#[derive(Debug, Clone)]
pub struct LintIssue {
    /// Where the issue occurred (e.g., "library.proto LibraryService.GetBook GET /v1/{name}")
    pub location: String,
    pub severity: LintSeverity,
    /// Type of lint issue (e.g., "binding_mismatch")
    pub kind: String,
    /// Human-readable description of the problem
    pub message: String,
    /// Optional suggestion for how to fix it
    pub suggestion: Option<String>,
}

impl LintIssue {
    pub fn new(
        location: impl Into<String>,
        severity: LintSeverity,
        kind: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        LintIssue {
            location: location.into(),
            severity,
            kind: kind.into(),
            message: message.into(),
            suggestion: None,
        }
    }

    #[must_use]
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }
}

/// Lint every file of a descriptor set.
#[must_use]
pub fn lint_descriptor(set: &DescriptorSet, planner: &Planner) -> Vec<LintIssue> {
    let mut issues = Vec::new();
    for file in &set.files {
        lint_file(&mut issues, file, planner);
    }
    issues
}

fn lint_file(issues: &mut Vec<LintIssue>, file: &FileDescriptor, planner: &Planner) {
    let mut seen_routes: HashSet<(Method, String)> = HashSet::new();

    for service in &file.services {
        for method in &service.methods {
            let ctx = MethodContext {
                file: file.path.as_path(),
                service: &service.name,
                method,
            };
            let Some(rule) = &method.http else {
                issues.push(
                    LintIssue::new(
                        method_location(&ctx),
                        LintSeverity::Warning,
                        "missing_http_rule",
                        format!("Method `{}` has no http rule and gets no route", method.name),
                    )
                    .with_suggestion("Add a google.api.http option if the method should be reachable over HTTP"),
                );
                continue;
            };
            for binding in rule.bindings() {
                lint_binding(issues, &ctx, binding, planner, &mut seen_routes);
            }
        }
    }
}

fn lint_binding(
    issues: &mut Vec<LintIssue>,
    ctx: &MethodContext<'_>,
    rule: &HttpRule,
    planner: &Planner,
    seen_routes: &mut HashSet<(Method, String)>,
) {
    let (http_method, template) = match rule.pattern() {
        Ok(Some(pattern)) => pattern,
        Ok(None) => {
            issues.push(LintIssue::new(
                method_location(ctx),
                LintSeverity::Error,
                "invalid_http_rule",
                "Http binding sets no verb",
            ));
            return;
        }
        Err(e) => {
            issues.push(LintIssue::new(
                method_location(ctx),
                LintSeverity::Error,
                "invalid_http_rule",
                e.to_string(),
            ));
            return;
        }
    };
    let location = binding_location(ctx, &http_method, template);

    let route = match compile(template) {
        Ok(route) => route,
        Err(e) => {
            issues.push(LintIssue::new(
                &location,
                LintSeverity::Error,
                e.kind(),
                e.to_string(),
            ));
            return;
        }
    };

    for segment in route.segments() {
        match segment {
            Segment::Unrecognized { raw } => issues.push(
                LintIssue::new(
                    &location,
                    LintSeverity::Warning,
                    "unrecognized_template_fragment",
                    format!("Template fragment `{}` is not a supported form and is routed verbatim", raw),
                )
                .with_suggestion(
                    "Use {name}, {name=*}, {name=**}, {name=literal}, {name=literal/*} or {name=literal/**}",
                ),
            ),
            Segment::Fixed { name, literal } => issues.push(LintIssue::new(
                &location,
                LintSeverity::Info,
                "dropped_literal_capture",
                format!(
                    "`{{{}={}}}` routes the literal `{}`; `{}` is not captured from the path",
                    name, literal, literal, name
                ),
            )),
            _ => {}
        }
    }

    let recovered = ParamTable::from_router_path(route.as_str());
    let field_names: HashSet<String> = ctx
        .method
        .input
        .fields
        .iter()
        .map(|f| sanitize_param_name(&f.name))
        .collect();
    for (param, _) in recovered.iter() {
        if !field_names.contains(param) {
            issues.push(
                LintIssue::new(
                    &location,
                    LintSeverity::Warning,
                    "unbound_route_param",
                    format!(
                        "Route parameter `{}` has no field in `{}`",
                        param, ctx.method.input.name
                    ),
                )
                .with_suggestion(format!(
                    "Add a uri-bound field named `{}` to `{}`",
                    param, ctx.method.input.name
                )),
            );
        }
    }

    if !seen_routes.insert((http_method.clone(), route.as_str().to_string())) {
        issues.push(LintIssue::new(
            &location,
            LintSeverity::Warning,
            "duplicate_route",
            format!("Route `{} {}` is already registered in this file", http_method, route),
        ));
    }

    if let Err(e) = planner.plan_binding(ctx, http_method, template) {
        issues.push(LintIssue::new(&location, LintSeverity::Error, e.kind(), e.to_string()));
    }
}

fn method_location(ctx: &MethodContext<'_>) -> String {
    format!(
        "{} {}.{}",
        ctx.file.display(),
        ctx.service,
        ctx.method.name
    )
}

fn binding_location(ctx: &MethodContext<'_>, http_method: &Method, template: &str) -> String {
    format!("{} {} {}", method_location(ctx), http_method, template)
}

/// True when any issue is an error.
#[must_use]
pub fn has_errors(issues: &[LintIssue]) -> bool {
    issues.iter().any(|i| i.severity == LintSeverity::Error)
}

fn with_severity(issues: &[LintIssue], severity: LintSeverity) -> Vec<&LintIssue> {
    issues.iter().filter(|i| i.severity == severity).collect()
}

/// Print lint issues grouped by severity
pub fn print_lint_issues(issues: &[LintIssue]) {
    if issues.is_empty() {
        println!("✅ No lint issues found!");
        return;
    }

    let errors = with_severity(issues, LintSeverity::Error);
    let warnings = with_severity(issues, LintSeverity::Warning);
    let infos = with_severity(issues, LintSeverity::Info);

    println!("\n📋 Lint Results:");
    println!(
        "   {} error(s), {} warning(s), {} info(s)\n",
        errors.len(),
        warnings.len(),
        infos.len()
    );

    for (title, group) in [
        ("❌ Errors (must fix):", errors),
        ("⚠️  Warnings (should fix):", warnings),
        ("ℹ️  Info:", infos),
    ] {
        if group.is_empty() {
            continue;
        }
        println!("{}", title);
        for issue in &group {
            println!("   [{}] {}", issue.kind, issue.location);
            println!("      {}", issue.message);
            if let Some(suggestion) = &issue.suggestion {
                println!("      💡 Suggestion: {}", suggestion);
            }
        }
        println!();
    }
}
