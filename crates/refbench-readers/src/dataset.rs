//! Hand-authored oracle datasets

use crate::error::ReaderError;
use refbench_domain::{RefactoringCategory, RefactoringRelationship, RefactoringSet};

/// Expand a dataset row into relationships
///
/// `before` and `after` may each list several newline-separated entities;
/// every before entity is paired with every after entity. "Field" in the
/// category name is read as "Attribute". A row with a blank side yields
/// nothing.
pub fn item(
    category_name: &str,
    before: &str,
    after: &str,
) -> Result<Vec<RefactoringRelationship>, ReaderError> {
    if before.trim().is_empty() || after.trim().is_empty() {
        return Ok(Vec::new());
    }
    let category = RefactoringCategory::from_name(&category_name.replace("Field", "Attribute"))?;

    let befores = before.trim().split('\n').map(str::trim).filter(|b| !b.is_empty());
    let mut relationships = Vec::new();
    for b in befores {
        for a in after.trim().split('\n').map(str::trim).filter(|a| !a.is_empty()) {
            relationships.push(RefactoringRelationship::new(category, b, a)?);
        }
    }
    Ok(relationships)
}

/// An ordered collection of oracle sets, one per revision
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    sets: Vec<RefactoringSet>,
}

/// Appends relationships to the revision most recently opened with [`Dataset::at`]
#[derive(Debug)]
pub struct RevisionBuilder<'a> {
    set: &'a mut RefactoringSet,
}

impl Dataset {
    /// Create an empty dataset
    pub fn new() -> Self {
        Self::default()
    }

    /// Open a new revision
    pub fn at(&mut self, project: &str, revision: &str) -> RevisionBuilder<'_> {
        self.sets.push(RefactoringSet::new(project, revision));
        let last = self.sets.len() - 1;
        RevisionBuilder {
            set: &mut self.sets[last],
        }
    }

    /// Every revision, in the order they were opened
    pub fn all(&self) -> &[RefactoringSet] {
        &self.sets
    }

    /// Consume the dataset
    pub fn into_sets(self) -> Vec<RefactoringSet> {
        self.sets
    }
}

impl<'a> RevisionBuilder<'a> {
    /// Add one literal relationship
    pub fn add(
        &mut self,
        category: RefactoringCategory,
        before: &str,
        after: &str,
    ) -> Result<&mut Self, ReaderError> {
        self.set.add(RefactoringRelationship::new(category, before, after)?);
        Ok(self)
    }

    /// Add a dataset row, see [`item`]
    pub fn item(
        &mut self,
        category_name: &str,
        before: &str,
        after: &str,
    ) -> Result<&mut Self, ReaderError> {
        self.set.add_all(item(category_name, before, after)?);
        Ok(self)
    }

    /// The set under construction
    pub fn set(&self) -> &RefactoringSet {
        self.set
    }
}

/// Oracle for aserg-ufmg/atmosphere at cc2b3f1
pub fn atmosphere_cc2b3f1() -> Result<RefactoringSet, ReaderError> {
    let mut dataset = Dataset::new();
    dataset
        .at("https://github.com/aserg-ufmg/atmosphere.git", "cc2b3f1")
        .item(
            "Move Class",
            "org.atmosphere.util.annotation.InputStreamIterator",
            "org.atmosphere.util.annotation.iterator.InputStreamIterator",
        )?
        .item(
            "Move Class",
            "org.atmosphere.util.CookieUtil",
            "org.atmosphere.util.tools.CookieUtil",
        )?
        .item(
            "Rename Class",
            "org.atmosphere.jersey.TestResource",
            "org.atmosphere.jersey.ResourceTest",
        )?
        .item(
            "Rename Class",
            "org.atmosphere.websocket.protocol.EchoProtocol",
            "org.atmosphere.websocket.protocol.ProtocolEcho",
        )?
        .item(
            "Extract Superclass",
            "org.atmosphere.config.FrameworkConfiguration\norg.atmosphere.config.ApplicationConfiguration",
            "org.atmosphere.config.AtmosphereConfigurationManager",
        )?
        .item(
            "Extract Interface",
            "org.atmosphere.cpr.AtmosphereFrameworkInitializer",
            "org.atmosphere.cpr.FrameworkInitializer",
        )?
        .item(
            "Rename Method",
            "org.atmosphere.util.uri.UriTemplate#match(CharSequence, Map<String, String>)",
            "org.atmosphere.util.uri.UriTemplate#matchURIAndTemplate(CharSequence, Map<String, String>)",
        )?
        .item(
            "Rename Method",
            "org.atmosphere.util.IOUtils#readEntirely(AtmosphereResource)",
            "org.atmosphere.util.IOUtils#readEntirelyBody(AtmosphereResource)",
        )?
        .item(
            "Move Method",
            "org.atmosphere.util.Utils#getInheritedPrivateMethod(Class<?>)",
            "org.atmosphere.inject.InjectableObjectFactory#getInheritedPrivateMethod(Class<?>)",
        )?
        .item(
            "Move Method",
            "org.atmosphere.util.IOUtils#isAtmosphere(String)",
            "org.atmosphere.cpr.ContainerInitializer#isAtmosphere(String)",
        )?
        .item(
            "Pull Up Method",
            "org.atmosphere.jersey.QueryStringTest#getUrlTarget(int) \norg.atmosphere.jersey.MappingResourceTest#getUrlTarget(int)",
            "org.atmosphere.jersey.BaseTest#getUrlTarget(int)",
        )?
        .item(
            "Push Down Method",
            "org.atmosphere.cpr.AtmosphereServlet#newAtmosphereFramework()",
            "org.atmosphere.cpr.MeteorServlet#newAtmosphereFramework()\norg.atmosphere.cpr.AtmosphereFrameworkTest.MyAtmosphereServlet#newAtmosphereFramework()",
        )?
        .item(
            "Extract Method",
            "org.atmosphere.jersey.AtmosphereFilter#create(AbstractMethod)",
            "org.atmosphere.jersey.AtmosphereFilter#getFilterForAnnotation(AbstractMethod, Class[])",
        )?
        .item(
            "Inline Method",
            "org.atmosphere.jersey.BaseTest#stopServer()",
            "org.atmosphere.jersey.BaseTest#unsetAtmosphereHandler()",
        )?
        .item(
            "Move Field",
            "org.atmosphere.interceptor.HeartbeatInterceptor#HEARTBEAT_FUTURE",
            "org.atmosphere.interceptor.IdleResourceInterceptor#HEARTBEAT_FUTURE",
        )?
        .item(
            "Pull Up Field",
            "org.atmosphere.interceptor.TrackMessageSizeB64Interceptor#OUT_ENCODING\norg.atmosphere.client.TrackMessageSizeInterceptor#OUT_ENCODING",
            "org.atmosphere.cpr.AtmosphereInterceptorAdapter#OUT_ENCODING",
        )?
        .item("Push Down Field", "", "")?;

    Ok(dataset.into_sets().into_iter().next().unwrap_or_else(|| {
        RefactoringSet::new("https://github.com/aserg-ufmg/atmosphere.git", "cc2b3f1")
    }))
}
