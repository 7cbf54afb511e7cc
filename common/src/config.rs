/// Inputs for a single bake.
///
/// Only ever built from [`Config::default`]; nothing here is read from the
/// environment or the command line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    /// Recipe the crust is rolled from.
    pub recipe: String,
    /// Apple variety used for the filling.
    pub variety: String,
    /// Oven temperature in degrees.
    pub temperature: u16,
}

pub const DEFAULT_RECIPE: &str = "grandma's secret recipe";
pub const DEFAULT_VARIETY: &str = "grannysmith";
pub const DEFAULT_TEMPERATURE: u16 = 375;

impl Default for Config {
    fn default() -> Self {
        Self {
            recipe: DEFAULT_RECIPE.to_string(),
            variety: DEFAULT_VARIETY.to_string(),
            temperature: DEFAULT_TEMPERATURE,
        }
    }
}

impl Config {
    /// The line announcing the oven is on.
    pub fn status_line(&self) -> String {
        format!("Baking the pie at {} degrees!", self.temperature)
    }
}
