//! Input components for command-line arguments.
//!
//! A [`Component`] binds one [`ArgumentSpec`] to the control a user edits it
//! with. The [`Variant`] decides which control that is, how the component is
//! laid out and how the edited value turns back into command-line tokens.
//!
//! ```
//! use rust_forms_core::argument_spec::ArgumentSpec;
//! use rust_forms_core::components::{Component, Variant};
//! use rust_forms_core::toolkit::memory::MemoryToolkit;
//!
//! let spec = ArgumentSpec {
//!     dest: "output".to_string(),
//!     option_strings: vec!["-o".to_string(), "--output".to_string()],
//!     ..ArgumentSpec::default()
//! };
//!
//! let mut component = Component::new(Variant::Optional, &spec)?;
//! component.build(&mut MemoryToolkit)?;
//! component.control_mut()?.set_value("file.txt");
//!
//! assert_eq!(component.serialize()?, "--output file.txt");
//! # Ok::<(), rust_forms_core::error::Error>(())
//! ```

pub mod choice;
pub mod counter;
pub mod flag;
pub mod optional;
pub mod positional;

use std::fmt::{Display, Formatter};

use log::debug;

use crate::argument_spec::ArgumentSpec;
use crate::error::Error::{
    AlreadyBuilt, EmptyChoices, InvalidValue, MissingOptionStrings, UninitializedComponent,
};
use crate::error::Result;
use crate::reflow::ReflowPolicy;
use crate::toolkit::{ControlKind, HelpAnnotation, InputControl, LayoutNode, Size, Toolkit};

pub use choice::DEFAULT_SENTINEL;

/// Note shown under the label of arguments taking one or more values.
pub const ONE_OR_MORE_NOTE: &str = "Note: at least 1 or more arguments are required";

/// The closed set of argument shapes a component can take.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Variant {
    Positional,
    Optional,
    Flag,
    Choice,
    Counter,
}

impl Variant {
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Variant::Positional => "Positional",
            Variant::Optional => "Optional",
            Variant::Flag => "Flag",
            Variant::Choice => "Choice",
            Variant::Counter => "Counter",
        }
    }

    /// Pick the variant matching the shape of `spec`.
    ///
    /// Arguments without option strings are positional. Otherwise an explicit
    /// `action` wins, then declared choices, and anything left takes a value.
    #[must_use]
    pub fn classify(spec: &ArgumentSpec) -> Self {
        if spec.is_positional() {
            return Variant::Positional;
        }

        match spec.action.as_deref() {
            Some("store_true" | "store_false" | "store_const") => Variant::Flag,
            Some("count") => Variant::Counter,
            _ if spec.choices.is_some() => Variant::Choice,
            _ => Variant::Optional,
        }
    }

    fn control_kind(self, spec: &ArgumentSpec) -> ControlKind<'_> {
        match self {
            Variant::Positional => positional::control_kind(),
            Variant::Optional => optional::control_kind(),
            Variant::Flag => flag::control_kind(spec),
            Variant::Choice => choice::control_kind(spec),
            Variant::Counter => counter::control_kind(),
        }
    }

    fn layout(self, spec: &ArgumentSpec, has_help: bool) -> LayoutNode {
        match self {
            Variant::Flag => flag::layout(spec, has_help),
            _ => stacked_layout(spec, has_help),
        }
    }

    /// Whether the control of this variant can hold `value` for `spec`.
    /// Text inputs take anything, toggles take `true`/`false`, drop downs
    /// take what they offer.
    #[must_use]
    pub fn accepts(self, spec: &ArgumentSpec, value: &str) -> bool {
        match self {
            Variant::Positional | Variant::Optional => true,
            Variant::Flag => flag::accepts(value),
            Variant::Choice => choice::accepts(spec, value),
            Variant::Counter => counter::accepts(value),
        }
    }

    #[must_use]
    pub fn reflow_policy(self) -> ReflowPolicy {
        match self {
            Variant::Flag => ReflowPolicy::Inline,
            _ => ReflowPolicy::Stacked,
        }
    }
}

impl Display for Variant {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// How a flag decides whether it contributes its option.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum FlagMode {
    /// Emit the option only while the toggle is checked.
    #[default]
    WhenChecked,
    /// Emit the option regardless of the toggle. Matches older front ends.
    Always,
}

/// How repeated counter options are joined.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum CounterJoin {
    /// `-v-v-v`
    #[default]
    Concatenate,
    /// `-v -v -v`
    Spaced,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct SerializeOptions {
    pub flag_mode: FlagMode,
    pub counter_join: CounterJoin,
}

#[derive(Debug)]
struct Widgets {
    control: Box<dyn InputControl>,
    help: Option<Box<dyn HelpAnnotation>>,
}

#[derive(Debug)]
enum Lifecycle {
    Unbuilt,
    Built(Widgets),
}

#[derive(Debug)]
pub struct Component<'a> {
    spec: &'a ArgumentSpec,
    variant: Variant,
    state: Lifecycle,
}

impl<'a> Component<'a> {
    /// Create an unbuilt component.
    ///
    /// # Errors
    ///
    /// Returns [`MissingOptionStrings`] if a non-positional variant is given a
    /// spec without option strings, [`EmptyChoices`] if a choice has an
    /// empty list of choices and [`InvalidValue`] if the default does not fit
    /// the variant.
    pub fn new(variant: Variant, spec: &'a ArgumentSpec) -> Result<Self> {
        if variant != Variant::Positional && spec.option_strings.is_empty() {
            return Err(MissingOptionStrings(spec.dest.clone()));
        }

        if variant == Variant::Choice && spec.choices.as_ref().is_some_and(Vec::is_empty) {
            return Err(EmptyChoices(spec.dest.clone()));
        }

        if let Some(default) = &spec.default {
            if !variant.accepts(spec, default) {
                return Err(InvalidValue {
                    dest: spec.dest.clone(),
                    value: default.clone(),
                });
            }
        }

        Ok(Self {
            spec,
            variant,
            state: Lifecycle::Unbuilt,
        })
    }

    /// Create an unbuilt component with the variant picked by [`Variant::classify`].
    ///
    /// # Errors
    ///
    /// See [`Component::new`].
    pub fn for_spec(spec: &'a ArgumentSpec) -> Result<Self> {
        Self::new(Variant::classify(spec), spec)
    }

    #[must_use]
    pub fn spec(&self) -> &'a ArgumentSpec {
        self.spec
    }

    #[must_use]
    pub fn variant(&self) -> Variant {
        self.variant
    }

    #[must_use]
    pub fn is_built(&self) -> bool {
        matches!(self.state, Lifecycle::Built(_))
    }

    #[must_use]
    pub fn label(&self) -> String {
        label_for(self.spec)
    }

    /// Create the widgets and describe their layout. Can only be done once.
    ///
    /// # Errors
    ///
    /// Returns [`AlreadyBuilt`] when called a second time.
    pub fn build(&mut self, toolkit: &mut dyn Toolkit) -> Result<LayoutNode> {
        if self.is_built() {
            return Err(AlreadyBuilt(self.variant.name()));
        }

        let mut control = toolkit.create_control(self.variant.control_kind(self.spec));
        if let Some(default) = &self.spec.default {
            control.set_value(default);
        }

        let help = self.spec.help.as_deref().map(|text| toolkit.create_help(text));
        let layout = self.variant.layout(self.spec, help.is_some());

        debug!("Built {} component for {}", self.variant, self.spec);
        self.state = Lifecycle::Built(Widgets { control, help });

        Ok(layout)
    }

    fn widgets(&self) -> Result<&Widgets> {
        match &self.state {
            Lifecycle::Built(widgets) => Ok(widgets),
            Lifecycle::Unbuilt => Err(UninitializedComponent(self.variant.name())),
        }
    }

    /// # Errors
    ///
    /// Returns [`UninitializedComponent`] before [`Component::build`].
    pub fn control(&self) -> Result<&dyn InputControl> {
        Ok(self.widgets()?.control.as_ref())
    }

    /// # Errors
    ///
    /// Returns [`UninitializedComponent`] before [`Component::build`].
    pub fn control_mut(&mut self) -> Result<&mut dyn InputControl> {
        match &mut self.state {
            Lifecycle::Built(widgets) => Ok(widgets.control.as_mut()),
            Lifecycle::Unbuilt => Err(UninitializedComponent(self.variant.name())),
        }
    }

    /// The help annotation, if the argument has help text.
    ///
    /// # Errors
    ///
    /// Returns [`UninitializedComponent`] before [`Component::build`].
    pub fn help(&self) -> Result<Option<&dyn HelpAnnotation>> {
        Ok(self.widgets()?.help.as_deref())
    }

    /// Serialize with the default [`SerializeOptions`].
    ///
    /// # Errors
    ///
    /// Returns [`UninitializedComponent`] before [`Component::build`].
    pub fn serialize(&self) -> Result<String> {
        self.serialize_with(SerializeOptions::default())
    }

    /// Command-line tokens contributed by the current value, or an empty
    /// string when the argument should be left out.
    ///
    /// # Errors
    ///
    /// Returns [`UninitializedComponent`] before [`Component::build`].
    pub fn serialize_with(&self, options: SerializeOptions) -> Result<String> {
        let control = self.widgets()?.control.as_ref();

        match self.variant {
            Variant::Positional => Ok(positional::serialize(control)),
            Variant::Optional => optional::serialize(self.spec, control),
            Variant::Flag => flag::serialize(self.spec, control, options.flag_mode),
            Variant::Choice => choice::serialize(self.spec, control),
            Variant::Counter => counter::serialize(self.spec, control, options.counter_join),
        }
    }

    /// Re-wrap the help text for a container of `size`.
    pub fn reflow(&mut self, size: Size) {
        let policy = self.variant.reflow_policy();
        if let Lifecycle::Built(Widgets {
            help: Some(help), ..
        }) = &mut self.state
        {
            policy.apply(size, help.as_mut());
        }
    }
}

/// Title-case a string: letters following a non-letter are upper-cased, all
/// other letters lower-cased.
#[must_use]
pub fn title_case(text: &str) -> String {
    let mut titled = String::with_capacity(text.len());
    let mut previous_is_letter = false;

    for c in text.chars() {
        if previous_is_letter {
            titled.extend(c.to_lowercase());
        } else {
            titled.extend(c.to_uppercase());
        }
        previous_is_letter = c.is_alphabetic();
    }

    titled
}

/// Display label: the title-cased dest, plus the first spelling when there
/// is more than one.
#[must_use]
pub fn label_for(spec: &ArgumentSpec) -> String {
    let label = title_case(&spec.dest);

    match spec.option_strings.as_slice() {
        [first, _, ..] => format!("{label} ({first})"),
        _ => label,
    }
}

fn stacked_layout(spec: &ArgumentSpec, has_help: bool) -> LayoutNode {
    let mut column = vec![
        LayoutNode::Label {
            text: label_for(spec),
            bold: true,
        },
        LayoutNode::Spacer(2),
    ];

    if has_help {
        column.push(LayoutNode::Help);
        column.push(LayoutNode::Spacer(2));
    } else {
        column.push(LayoutNode::Stretch(1));
    }

    if spec.requires_one_or_more() {
        column.push(LayoutNode::Note(ONE_OR_MORE_NOTE.to_string()));
    }

    column.push(LayoutNode::Stretch(1));
    column.push(LayoutNode::Control { expand: true });

    LayoutNode::Column(column)
}

fn preferred_option(spec: &ArgumentSpec) -> Result<&str> {
    spec.preferred_option()
        .ok_or_else(|| MissingOptionStrings(spec.dest.clone()))
}
