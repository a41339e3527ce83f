/// Identity of a panel use case
pub trait UseCaseMetadata {
    /// Index, e.g. "u704"
    fn usecase_index() -> &'static str;

    /// Technical name, e.g. "generate_erp_rolling"
    fn usecase_name() -> &'static str;

    /// Name shown on the panel
    fn display_name() -> &'static str;

    /// Short hint under the section title
    fn description() -> &'static str {
        ""
    }

    /// Service route the request is posted to
    fn endpoint() -> &'static str;

    /// Full name like "u704_generate_erp_rolling", used as the DOM id
    fn full_name() -> String {
        format!("{}_{}", Self::usecase_index(), Self::usecase_name())
    }
}
