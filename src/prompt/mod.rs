use crate::wire::{GenerationRequest, Instruction};

const NAME_COUNT: &str = "six";
const DESCRIPTION_WORDS: u32 = 30;

pub fn system_prompt() -> String {
    format!(
        "Generate {NAME_COUNT} creative business names with taglines and a {DESCRIPTION_WORDS}-word description for each."
    )
}

pub fn user_prompt(req: &GenerationRequest) -> String {
    format!(
        "Generate {NAME_COUNT} business names with taglines and {DESCRIPTION_WORDS}-word descriptions for a {} in the {} industry.",
        req.business_type, req.category
    )
}

pub fn instruction(req: &GenerationRequest) -> Instruction {
    Instruction { system: system_prompt(), user: user_prompt(req) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wire::Category;

    #[test]
    fn user_prompt_interpolates_inputs() {
        let req = GenerationRequest::new("artisan bakery", Category::Food).unwrap();
        assert_eq!(
            user_prompt(&req),
            "Generate six business names with taglines and 30-word descriptions for a artisan bakery in the Food industry."
        );
    }

    #[test]
    fn system_prompt_asks_for_six() {
        assert_eq!(
            system_prompt(),
            "Generate six creative business names with taglines and a 30-word description for each."
        );
    }
}
