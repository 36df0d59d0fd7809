//! Paths and operations.

use super::{literal, non_empty, Mapper};
use crate::document::{Operation, PathItem, SecurityRequirement};
use crate::error::ConvertError;
use crate::graph::{LiteralNode, UriNode};
use crate::vocab::Predicate;

impl Mapper<'_> {
    pub(super) fn map_paths(&mut self, paths: &[PathItem]) -> Result<(), ConvertError> {
        for item in paths {
            let path_uri = self.ns.path(&item.path)?;
            for operation in &item.operations {
                self.map_operation(&path_uri, operation)?;
            }
        }
        Ok(())
    }

    fn map_operation(&mut self, path_uri: &UriNode, op: &Operation) -> Result<(), ConvertError> {
        let op_uri = self.ns.operation(path_uri, &op.method)?;

        for tag in op.tags.iter().flatten() {
            let tag_uri = self.ns.path_tag(tag)?;
            self.assert(path_uri, Predicate::IsPathTag, tag_uri)?;
        }

        if let Some(summary) = non_empty(&op.summary) {
            self.assert(&op_uri, Predicate::HasSummary, literal(summary))?;
        }
        if let Some(description) = non_empty(&op.description) {
            self.assert(&op_uri, Predicate::HasDescription, literal(description))?;
        }

        for mime in op.consumes.iter().flatten() {
            self.assert(&op_uri, Predicate::Consumes, LiteralNode::new(mime))?;
        }
        for mime in op.produces.iter().flatten() {
            self.assert(&op_uri, Predicate::Produces, LiteralNode::new(mime))?;
        }

        if let Some(operation_id) = non_empty(&op.operation_id) {
            self.assert(&op_uri, Predicate::HasOperationId, literal(operation_id))?;
        }

        for requirement in op.security.iter().flatten() {
            self.map_security_requirement(&op_uri, requirement)?;
        }

        // The one triple every operation gets.
        let method_uri = self.ns.method(&op.method)?;
        self.assert(&op_uri, Predicate::IsMethodType, method_uri)?;

        tracing::trace!(operation = op_uri.as_str(), "mapped operation");
        Ok(())
    }

    fn map_security_requirement(
        &mut self,
        op_uri: &UriNode,
        requirement: &SecurityRequirement,
    ) -> Result<(), ConvertError> {
        for (scheme, scopes) in requirement.iter() {
            self.assert(op_uri, Predicate::HasSecurity, LiteralNode::new(scheme))?;
            for scope in scopes {
                self.assert(op_uri, Predicate::SecurityScope, LiteralNode::new(scope))?;
            }
        }
        Ok(())
    }
}
