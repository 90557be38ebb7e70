//! Recursive-descent construction of read requests from textual
//! specifications.
//!
//! Every token is validated against the injected registry while the request
//! is built; malformed input yields a deterministic error, never a partial
//! request.

use baclink_core::{AddressResolver, ObjectId, ObjectRegistry, ObjectType};
use tracing::debug;

use crate::error::{ReadError, ReadResult};
use crate::request::{
    PropertyReference, ReadAccessSpec, ReadPropertyMultipleRequest, ReadPropertyRequest,
    PROPERTY_SET_SELECTORS,
};
use crate::token::{SpecTokens, Token};

/// Builds structured requests from whitespace-delimited specifications.
pub struct RequestParser<'a> {
    registry: &'a dyn ObjectRegistry,
    resolver: &'a dyn AddressResolver,
}

impl<'a> RequestParser<'a> {
    pub fn new(registry: &'a dyn ObjectRegistry, resolver: &'a dyn AddressResolver) -> Self {
        Self { registry, resolver }
    }

    /// Parse `"<address> <object-type> <instance> <property> [ <index> ]"`.
    ///
    /// Exactly four or five tokens. A fifth token overrides `array_index`.
    pub fn parse_read(
        &self,
        spec: &str,
        array_index: Option<u32>,
    ) -> ReadResult<ReadPropertyRequest> {
        let mut tokens = SpecTokens::parse(spec)?;
        if tokens.remaining() < 3 || tokens.remaining() > 4 {
            return Err(ReadError::MalformedSpec(format!(
                "expected `<address> <type> <instance> <property> [ <index> ]`, got {} tokens",
                tokens.remaining() + 1
            )));
        }

        let destination = self.resolver.resolve(tokens.address())?;
        let object_type = self.parse_object_type(&mut tokens)?;
        let instance = tokens.expect_integer("object instance")?;
        let property = tokens.expect_ident("property identifier")?;

        if self
            .registry
            .property_datatype(object_type, property)
            .is_none()
        {
            return Err(ReadError::InvalidProperty {
                object_type,
                property: property.to_string(),
            });
        }

        let array_index = match tokens.advance() {
            Some(Token::Integer(index)) => Some(index),
            Some(Token::Ident(raw)) => {
                return Err(ReadError::MalformedSpec(format!(
                    "expected array index, found `{}`",
                    raw
                )))
            }
            None => array_index,
        };

        let request = ReadPropertyRequest {
            destination,
            object: ObjectId::new(object_type, instance),
            property: property.to_string(),
            array_index,
        };
        debug!(destination = %request.destination, object = %request.object,
            property = %request.property, ?array_index, "built read request");
        Ok(request)
    }

    /// Parse `"<address> ( <object-type> <instance> ( <property> [ <index> ] )... )..."`.
    ///
    /// Groups are delimited by the first token that is not a known property
    /// identifier: that token starts the next object group.
    pub fn parse_read_multiple(&self, spec: &str) -> ReadResult<ReadPropertyMultipleRequest> {
        let mut tokens = SpecTokens::parse(spec)?;
        let destination = self.resolver.resolve(tokens.address())?;

        let mut specs = Vec::new();
        while !tokens.is_empty() {
            let object_type = self.parse_object_type(&mut tokens)?;
            let instance = tokens.expect_integer("object instance")?;
            let object = ObjectId::new(object_type, instance);

            let mut properties = Vec::new();
            while let Some(Token::Ident(candidate)) = tokens.peek() {
                if !self.registry.is_property_identifier(candidate) {
                    // next object group starts here
                    break;
                }
                tokens.advance();

                if !PROPERTY_SET_SELECTORS.contains(&candidate)
                    && self
                        .registry
                        .property_datatype(object_type, candidate)
                        .is_none()
                {
                    return Err(ReadError::InvalidProperty {
                        object_type,
                        property: candidate.to_string(),
                    });
                }

                let mut reference = PropertyReference::new(candidate);
                if let Some(Token::Integer(index)) = tokens.peek() {
                    tokens.advance();
                    reference.array_index = Some(index);
                }
                properties.push(reference);
            }

            if properties.is_empty() {
                return Err(ReadError::EmptyPropertyList { object });
            }
            specs.push(ReadAccessSpec { object, properties });
        }

        if specs.is_empty() {
            return Err(ReadError::EmptySpecList);
        }
        debug!(%destination, groups = specs.len(), "built read-multiple request");
        Ok(ReadPropertyMultipleRequest { destination, specs })
    }

    fn parse_object_type(&self, tokens: &mut SpecTokens<'_>) -> ReadResult<ObjectType> {
        match tokens.advance() {
            Some(Token::Integer(code)) => u16::try_from(code).map(ObjectType).map_err(|_| {
                ReadError::MalformedSpec(format!("object type code out of range: {}", code))
            }),
            Some(Token::Ident(name)) => self
                .registry
                .resolve_object_type(name)
                .ok_or_else(|| ReadError::UnknownObjectType(name.to_string())),
            None => Err(ReadError::MalformedSpec(
                "expected object type, found end of input".to_string(),
            )),
        }
    }
}
