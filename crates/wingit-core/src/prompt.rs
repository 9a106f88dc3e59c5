/// Model-facing instructions for turning `target_checklist` output into a
/// printable field checklist. Empty arguments fall back to friendly wording.
pub fn field_checklist_prompt(location: &str, day_range: &str) -> String {
    let location = match location.trim() {
        "" => "this area",
        loc => loc,
    };
    let day_range = match day_range.trim() {
        "" => "the recent period",
        range => range,
    };

    format!(
        "You are a birding assistant. The user has just called the WingIt tool \"target_checklist\" \
         to get likely new lifers near {location} for {day_range}.\n\
         \n\
         Using the tool output provided in this conversation (JSON with \"targets\" and \"filters\"), \
         produce a concise, printable field checklist:\n\
         \n\
         - Focus only on likely lifers (the \"targets\" array).\n\
         - Group species by approximate recent frequency (high / medium / low) based on \"recentFrequency\".\n\
         - For each species, show: common name, scientific name, and a short note like \
         \"seen recently at <locName>\" if present.\n\
         - Keep it compact, suitable for printing or quick reference in the field.\n\
         - Do not reprint the raw JSON; summarize it.\n\
         \n\
         If there are no targets, explain that there are no likely new lifers for this query and \
         suggest broadening radiusKm or daysBack."
    )
}
