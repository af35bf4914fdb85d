use super::AggregateId;

/// Трейт для корня агрегата
///
/// Instance data plus the static naming every roster screen relies on
/// (page ids, headings, modal titles).
pub trait AggregateRoot {
    /// Тип идентификатора агрегата
    type Id: AggregateId;

    // ============================================================================
    // Instance methods
    // ============================================================================

    /// Получить ID записи
    fn id(&self) -> &Self::Id;

    // ============================================================================
    // Class metadata
    // ============================================================================

    /// Index of the aggregate in the system (e.g. "a001")
    fn aggregate_index() -> &'static str;

    /// Collection name (e.g. "employee")
    fn collection_name() -> &'static str;

    /// Singular UI name (e.g. "従業員")
    fn element_name() -> &'static str;

    /// List UI name (e.g. "従業員一覧")
    fn list_name() -> &'static str;

    // ============================================================================
    // Default implementations
    // ============================================================================

    /// Full system name (e.g. "a001_employee")
    fn full_name() -> String {
        format!("{}_{}", Self::aggregate_index(), Self::collection_name())
    }
}
