/// Wraps the caller's ingredients in the chef-assistant instructions sent upstream.
///
/// The ingredients are interpolated as given: no trimming, escaping or length limit.
pub fn recipe_prompt(ingredients: &str) -> String {
    format!(
        "You are a professional chef AI assistant. Create a detailed recipe using the following ingredients: {ingredients}.

Please provide:
1. Recipe name
2. Cooking time
3. Difficulty level
4. Complete ingredients list (including quantities)
5. Step-by-step cooking instructions
6. Nutritional highlights
7. Serving suggestions

Format the response in a clear, easy-to-read structure. If some common kitchen staples are needed (salt, pepper, oil), feel free to include them."
    )
}

#[cfg(test)]
mod tests {
    use super::recipe_prompt;

    #[test]
    fn interpolates_ingredients_verbatim() {
        let prompt = recipe_prompt("  chicken, rice, {broccoli}\n");
        assert!(prompt.contains("following ingredients:   chicken, rice, {broccoli}\n."));
    }

    #[test]
    fn asks_for_every_recipe_section() {
        let prompt = recipe_prompt("eggs");
        for section in [
            "1. Recipe name",
            "2. Cooking time",
            "3. Difficulty level",
            "4. Complete ingredients list (including quantities)",
            "5. Step-by-step cooking instructions",
            "6. Nutritional highlights",
            "7. Serving suggestions",
        ] {
            assert!(prompt.contains(section), "missing {section}");
        }
    }
}
