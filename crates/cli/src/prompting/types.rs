/// Represents the user's choice when confirming an assembled command line.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum RunChoice {
    Yes,
    No,
    ChangeValues,
}
