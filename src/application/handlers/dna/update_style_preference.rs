//! UpdateStylePreference - Command handler for curating one style entry.

use std::sync::Arc;

use crate::domain::dna::{CreativeDna, StyleKind};
use crate::domain::foundation::{DomainError, Timestamp, UnitScore, UserId};
use crate::ports::CreativeDnaRepository;

/// Command to add or curate a style entry.
#[derive(Debug, Clone)]
pub struct UpdateStylePreferenceCommand {
    pub user_id: UserId,
    pub kind: StyleKind,
    pub name: String,
    /// Raw strength; must lie in [0, 1] when given.
    pub strength: Option<f64>,
    pub examples: Vec<String>,
    pub keywords: Vec<String>,
}

/// Handler for style curation.
pub struct UpdateStylePreferenceHandler {
    repository: Arc<dyn CreativeDnaRepository>,
}

impl UpdateStylePreferenceHandler {
    pub fn new(repository: Arc<dyn CreativeDnaRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, cmd: UpdateStylePreferenceCommand) -> Result<CreativeDna, DomainError> {
        // 1. Validate input
        let strength = cmd
            .strength
            .map(UnitScore::try_new)
            .transpose()
            .map_err(|_| DomainError::validation("strength", "Strength must be between 0 and 1"))?;

        // 2. Load or create profile
        let now = Timestamp::now();
        let mut dna = match self.repository.find_by_user(&cmd.user_id).await? {
            Some(dna) => dna,
            None => CreativeDna::initial(cmd.user_id.clone(), now),
        };

        // 3. Curate and persist
        dna.curate_style(cmd.kind, &cmd.name, strength, cmd.examples, cmd.keywords, now)?;
        self.repository.upsert(&dna).await?;

        tracing::debug!(user_id = %cmd.user_id, kind = %cmd.kind, style = %cmd.name, "Style preference updated");

        Ok(dna)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::ErrorCode;
    use async_trait::async_trait;
    use std::sync::Mutex;

    struct MockRepository {
        profiles: Mutex<Vec<CreativeDna>>,
        fail_upsert: bool,
    }

    impl MockRepository {
        fn new() -> Self {
            Self {
                profiles: Mutex::new(Vec::new()),
                fail_upsert: false,
            }
        }
    }

    #[async_trait]
    impl CreativeDnaRepository for MockRepository {
        async fn find_by_user(&self, user_id: &UserId) -> Result<Option<CreativeDna>, DomainError> {
            Ok(self
                .profiles
                .lock()
                .unwrap()
                .iter()
                .find(|d| d.user_id() == user_id)
                .cloned())
        }

        async fn upsert(&self, dna: &CreativeDna) -> Result<(), DomainError> {
            if self.fail_upsert {
                return Err(DomainError::database("write failed"));
            }
            let mut profiles = self.profiles.lock().unwrap();
            profiles.retain(|d| d.id() != dna.id());
            profiles.push(dna.clone());
            Ok(())
        }
    }

    fn test_user_id() -> UserId {
        UserId::new("designer").unwrap()
    }

    fn command(name: &str, strength: Option<f64>) -> UpdateStylePreferenceCommand {
        UpdateStylePreferenceCommand {
            user_id: test_user_id(),
            kind: StyleKind::Visual,
            name: name.to_string(),
            strength,
            examples: vec!["poster.png".to_string()],
            keywords: vec!["geometric".to_string()],
        }
    }

    #[tokio::test]
    async fn creates_profile_and_inserts_style() {
        let repo = Arc::new(MockRepository::new());
        let handler = UpdateStylePreferenceHandler::new(repo.clone());

        let dna = handler.handle(command("bauhaus", Some(0.6))).await.unwrap();

        assert_eq!(dna.visual_style().len(), 1);
        assert_eq!(dna.visual_style()[0].strength.value(), 0.6);
        assert_eq!(dna.visual_style()[0].keywords, vec!["geometric"]);
        assert_eq!(repo.profiles.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn curating_existing_style_keeps_strength() {
        let repo = Arc::new(MockRepository::new());
        let handler = UpdateStylePreferenceHandler::new(repo.clone());
        handler.handle(command("bauhaus", Some(0.6))).await.unwrap();

        let mut curate = command("bauhaus", None);
        curate.keywords = vec!["grid".to_string(), "primary colors".to_string()];
        let dna = handler.handle(curate).await.unwrap();

        assert_eq!(dna.visual_style().len(), 1);
        assert_eq!(dna.visual_style()[0].strength.value(), 0.6);
        assert_eq!(dna.visual_style()[0].keywords, vec!["grid", "primary colors"]);
    }

    #[tokio::test]
    async fn rejects_out_of_range_strength() {
        let repo = Arc::new(MockRepository::new());
        let handler = UpdateStylePreferenceHandler::new(repo.clone());

        let err = handler.handle(command("bauhaus", Some(1.5))).await.unwrap_err();

        assert_eq!(err.code(), ErrorCode::ValidationFailed);
        assert!(repo.profiles.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn rejects_blank_name() {
        let handler = UpdateStylePreferenceHandler::new(Arc::new(MockRepository::new()));

        let err = handler.handle(command("  ", Some(0.5))).await.unwrap_err();

        assert_eq!(err.code(), ErrorCode::ValidationFailed);
    }

    #[tokio::test]
    async fn save_failure_propagates() {
        let mut repo = MockRepository::new();
        repo.fail_upsert = true;
        let handler = UpdateStylePreferenceHandler::new(Arc::new(repo));

        let err = handler.handle(command("bauhaus", Some(0.5))).await.unwrap_err();

        assert_eq!(err.code(), ErrorCode::DatabaseError);
    }
}
