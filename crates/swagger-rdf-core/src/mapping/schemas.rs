//! Security definitions and model definitions.

use super::{literal, Mapper};
use crate::document::{Definition, OrderedMap, Scalar, SecurityDefinition, SecurityValue};
use crate::error::ConvertError;
use crate::graph::{LiteralNode, UriNode};
use crate::vocab::{Class, Predicate};

impl Mapper<'_> {
    pub(super) fn map_security_definitions(
        &mut self,
        definitions: &[SecurityDefinition],
    ) -> Result<(), ConvertError> {
        for definition in definitions {
            let def_uri = self.ns.security_definition(&definition.name)?;
            self.assert_class(&def_uri, Predicate::IsSecurityDefinition, Class::SecurityDefinition)?;
            self.assert(&def_uri, Predicate::HasName, LiteralNode::new(&definition.name))?;

            for (name, value) in definition.properties.iter() {
                let prop_uri = self.ns.member(&def_uri, name)?;
                self.assert_class(&prop_uri, Predicate::HasType, Class::SecurityDefinitionProperty)?;
                self.assert(&prop_uri, Predicate::HasName, LiteralNode::new(name))?;

                // The property resource doubles as the predicate linking the
                // definition to its value.
                match value {
                    SecurityValue::Text(text) => {
                        self.graph.assert_triple(&def_uri, &prop_uri, LiteralNode::new(text));
                    }
                    SecurityValue::Object(nested) => {
                        self.map_nested_security_property(&def_uri, &prop_uri, nested)?;
                    }
                }
            }
        }
        Ok(())
    }

    fn map_nested_security_property(
        &mut self,
        def_uri: &UriNode,
        prop_uri: &UriNode,
        nested: &OrderedMap<Scalar>,
    ) -> Result<(), ConvertError> {
        for (key, value) in nested.iter() {
            let nested_uri = self.ns.member(prop_uri, key)?;
            self.graph.assert_triple(def_uri, prop_uri, nested_uri.clone());
            self.assert(&nested_uri, Predicate::HasName, LiteralNode::new(key))?;
            self.assert(&nested_uri, Predicate::HasValue, literal(value))?;
        }
        Ok(())
    }

    pub(super) fn map_definitions(&mut self, definitions: &[Definition]) -> Result<(), ConvertError> {
        for definition in definitions {
            let Some(properties) = &definition.properties else {
                continue;
            };
            let def_uri = self.ns.definition(&definition.name)?;

            for name in properties {
                let prop_uri = self.ns.member(&def_uri, name)?;
                self.assert(&def_uri, Predicate::IsDefinition, prop_uri.clone())?;
                self.assert_class(&prop_uri, Predicate::HasProperty, Class::Property)?;
                self.assert(&prop_uri, Predicate::HasName, LiteralNode::new(name))?;
            }
        }
        Ok(())
    }
}
