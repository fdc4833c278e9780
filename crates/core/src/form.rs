//! A complete form for one program: a component per declared argument.

use indexmap::IndexMap;
use log::{debug, warn};

use crate::argument_spec::ProgramDefinition;
use crate::components::{Component, SerializeOptions};
use crate::error::Result;
use crate::toolkit::{LayoutNode, Size, Toolkit};

#[derive(Debug)]
pub struct Form<'a> {
    program: &'a ProgramDefinition,
    components: Vec<Component<'a>>,
    options: SerializeOptions,
}

impl<'a> Form<'a> {
    /// Create an unbuilt component for every argument of `program`.
    ///
    /// # Errors
    ///
    /// Returns an error if an argument cannot back the variant it is
    /// classified as (see [`Component::new`]).
    pub fn new(program: &'a ProgramDefinition) -> Result<Self> {
        let components = program
            .arguments
            .iter()
            .map(Component::for_spec)
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            program,
            components,
            options: SerializeOptions::default(),
        })
    }

    #[must_use]
    pub fn with_options(mut self, options: SerializeOptions) -> Self {
        self.options = options;
        self
    }

    #[must_use]
    pub fn program(&self) -> &'a ProgramDefinition {
        self.program
    }

    #[must_use]
    pub fn components(&self) -> &[Component<'a>] {
        &self.components
    }

    pub fn components_mut(&mut self) -> &mut [Component<'a>] {
        &mut self.components
    }

    /// Build every component, returning their layouts in declaration order.
    ///
    /// # Errors
    ///
    /// Returns an error if the form was already built.
    pub fn build(&mut self, toolkit: &mut dyn Toolkit) -> Result<Vec<LayoutNode>> {
        self.components
            .iter_mut()
            .map(|component| component.build(toolkit))
            .collect()
    }

    pub fn reflow(&mut self, size: Size) {
        debug!("Reflowing {} components for {:?}", self.components.len(), size);
        for component in &mut self.components {
            component.reflow(size);
        }
    }

    /// Join every non-empty serialized argument with single spaces, in
    /// declaration order.
    ///
    /// # Errors
    ///
    /// Returns an error if any component has not been built.
    pub fn assemble(&self) -> Result<String> {
        let mut tokens = Vec::with_capacity(self.components.len());

        for component in &self.components {
            let serialized = component.serialize_with(self.options)?;
            if !serialized.is_empty() {
                tokens.push(serialized);
            }
        }

        Ok(tokens.join(" "))
    }

    /// The program words followed by the assembled arguments.
    ///
    /// # Errors
    ///
    /// See [`Form::assemble`].
    pub fn command_line(&self) -> Result<String> {
        let arguments = self.assemble()?;
        let mut words = self.program.program.clone();
        if !arguments.is_empty() {
            words.push(arguments);
        }

        Ok(words.join(" "))
    }

    /// Current raw control values keyed by dest.
    ///
    /// # Errors
    ///
    /// Returns an error if any component has not been built.
    pub fn values(&self) -> Result<IndexMap<String, String>> {
        self.components
            .iter()
            .map(|component| {
                Ok((
                    component.spec().dest.clone(),
                    component.control()?.value(),
                ))
            })
            .collect()
    }

    /// Put previously entered values back into the controls. Unknown dests
    /// and values the control cannot hold are skipped.
    ///
    /// # Errors
    ///
    /// Returns an error if any matching component has not been built.
    pub fn prefill(&mut self, values: &IndexMap<String, String>) -> Result<()> {
        for component in &mut self.components {
            let Some(value) = values.get(&component.spec().dest) else {
                continue;
            };

            if component.variant().accepts(component.spec(), value) {
                component.control_mut()?.set_value(value);
            } else {
                warn!("Not restoring `{}` into {}", value, component.spec());
            }
        }

        Ok(())
    }
}
