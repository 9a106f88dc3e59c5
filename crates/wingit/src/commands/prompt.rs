use wingit_core::field_checklist_prompt;

pub fn run(location: &str, day_range: &str) -> anyhow::Result<()> {
    println!("{}", field_checklist_prompt(location, day_range));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_runs_with_blank_arguments() {
        assert!(run("", "").is_ok());
    }
}
