use super::header::header_fields;
use super::query::query_fields;
use super::types::{FilePlan, MethodBindingPlan, MethodContext, RoutePlan};
use super::uri::uri_fields;
use crate::config::NoBodyMethods;
use crate::descriptor::{DescriptorSet, FileDescriptor, HttpRule, MethodDescriptor};
use crate::error::{BindingError, PlanError};
use crate::template::compile;
use http::Method;
use std::path::PathBuf;
use tracing::{debug, error, info, warn};

/// Result of planning one file. A failed file carries the error that aborted it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileOutcome {
    pub path: PathBuf,
    pub result: Result<FilePlan, PlanError>,
}

/// Computes binding plans for methods, files and descriptor sets.
///
/// Planning is pure: a `Planner` holds only the no-body method set, is
/// `Send + Sync`, and may be shared across workers. Methods and files have no
/// ordering dependency on each other.
#[derive(Debug, Clone, Default)]
pub struct Planner {
    no_body: NoBodyMethods,
}

impl Planner {
    #[must_use]
    pub fn new(no_body: NoBodyMethods) -> Self {
        Planner { no_body }
    }

    /// Plan a single HTTP binding of a method.
    ///
    /// Order matters: the template is compiled first, URI fields are resolved
    /// against the compiled route, and query extraction consumes the URI
    /// result.
    ///
    /// # Errors
    ///
    /// Any [`BindingError`]: empty template, a route parameter whose field is
    /// not bound to the URI, or an unbound field on a no-body method.
    pub fn plan_binding(
        &self,
        ctx: &MethodContext<'_>,
        http_method: Method,
        template: &str,
    ) -> Result<RoutePlan, BindingError> {
        let route = compile(template)?;
        let router_path = route.into_string();

        let header = header_fields(&ctx.method.input);
        let uri = uri_fields(ctx, &router_path)?;
        let rest = query_fields(ctx, &http_method, &uri, &self.no_body)?;

        debug!(
            service = %ctx.service,
            method = %ctx.method.name,
            http_method = %http_method,
            router_path = %router_path,
            header = header.len(),
            uri = uri.len(),
            query = rest.query_fields.len(),
            body = rest.body_fields.len(),
            "Planned method binding"
        );

        Ok(RoutePlan {
            service: ctx.service.to_string(),
            method: ctx.method.name.clone(),
            http_method,
            template: template.to_string(),
            router_path,
            bindings: MethodBindingPlan {
                header_fields: header,
                uri_fields: uri,
                query_fields: rest.query_fields,
                body_fields: rest.body_fields,
            },
        })
    }

    /// Plan every HTTP binding of a method: the primary rule first, then each
    /// additional binding in declaration order.
    ///
    /// Methods without an HTTP rule yield no routes. A binding that sets no
    /// verb is skipped with a warning.
    ///
    /// # Errors
    ///
    /// The first failing binding aborts the whole method.
    pub fn plan_method(
        &self,
        file: &FileDescriptor,
        service: &str,
        method: &MethodDescriptor,
    ) -> Result<Vec<RoutePlan>, PlanError> {
        let Some(rule) = &method.http else {
            debug!(
                service = %service,
                method = %method.name,
                "Method has no http rule; not exposed over HTTP"
            );
            return Ok(Vec::new());
        };

        let ctx = MethodContext {
            file: file.path.as_path(),
            service,
            method,
        };
        let mut routes = Vec::with_capacity(1 + rule.additional_bindings.len());
        for binding in rule.bindings() {
            if let Some(route) = self.plan_rule(&ctx, binding)? {
                routes.push(route);
            }
        }
        Ok(routes)
    }

    fn plan_rule(
        &self,
        ctx: &MethodContext<'_>,
        rule: &HttpRule,
    ) -> Result<Option<RoutePlan>, PlanError> {
        let Some((http_method, template)) = rule.pattern()? else {
            warn!(
                service = %ctx.service,
                method = %ctx.method.name,
                "Http binding sets no verb; skipped"
            );
            return Ok(None);
        };
        Ok(Some(self.plan_binding(ctx, http_method, template)?))
    }

    /// Plan every method of every service in a file.
    ///
    /// # Errors
    ///
    /// The first failing method aborts the file.
    pub fn plan_file(&self, file: &FileDescriptor) -> Result<FilePlan, PlanError> {
        let mut routes = Vec::new();
        for service in &file.services {
            for method in &service.methods {
                routes.extend(self.plan_method(file, &service.name, method)?);
            }
        }
        info!(
            file = %file.path.display(),
            routes = routes.len(),
            "Planned file"
        );
        Ok(FilePlan {
            path: file.path.clone(),
            routes,
        })
    }

    /// Plan each file independently. A failure aborts only the file it occurs
    /// in; sibling files are still planned.
    #[must_use]
    pub fn plan_set(&self, set: &DescriptorSet) -> Vec<FileOutcome> {
        set.files
            .iter()
            .map(|file| {
                let result = self.plan_file(file);
                if let Err(e) = &result {
                    error!(
                        file = %file.path.display(),
                        kind = e.kind(),
                        error = %e,
                        "Planning aborted for file"
                    );
                }
                FileOutcome {
                    path: file.path.clone(),
                    result,
                }
            })
            .collect()
    }
}
