#![forbid(unsafe_code)]

//! Diagram regions and their static catalog.
//!
//! The diagram has three base sets (Infrastructure, Software, Machine
//! Learning). Every non-empty combination of them is a region, so there are
//! exactly seven. [`RegionId`] is closed: [`lookup`] is an exhaustive `match`,
//! and a new variant without a descriptor does not compile.

use std::fmt;
use std::str::FromStr;

use academy_style::Accent;
use bitflags::bitflags;

bitflags! {
    /// A subset of the three base sets.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct CoverageSet: u8 {
        const INFRASTRUCTURE   = 0b001;
        const SOFTWARE         = 0b010;
        const MACHINE_LEARNING = 0b100;
    }
}

/// One of the three base circles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BaseSet {
    Infrastructure,
    Software,
    MachineLearning,
}

impl BaseSet {
    pub const ALL: [BaseSet; 3] = [
        BaseSet::Infrastructure,
        BaseSet::Software,
        BaseSet::MachineLearning,
    ];

    /// The single-member coverage set for this base.
    pub const fn flag(self) -> CoverageSet {
        match self {
            BaseSet::Infrastructure => CoverageSet::INFRASTRUCTURE,
            BaseSet::Software => CoverageSet::SOFTWARE,
            BaseSet::MachineLearning => CoverageSet::MACHINE_LEARNING,
        }
    }

    /// The region covering only this base.
    pub const fn region(self) -> RegionId {
        match self {
            BaseSet::Infrastructure => RegionId::Infrastructure,
            BaseSet::Software => RegionId::Software,
            BaseSet::MachineLearning => RegionId::MachineLearning,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            BaseSet::Infrastructure => "Infrastructure",
            BaseSet::Software => "Software",
            BaseSet::MachineLearning => "Machine Learning",
        }
    }
}

/// Identifier of one of the seven diagram regions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RegionId {
    Infrastructure,
    Software,
    MachineLearning,
    InfrastructureSoftware,
    SoftwareMachineLearning,
    InfrastructureMachineLearning,
    InfrastructureSoftwareMachineLearning,
}

impl RegionId {
    /// All regions: the three bases, the three pairs, then the triple.
    pub const ALL: [RegionId; 7] = [
        RegionId::Infrastructure,
        RegionId::Software,
        RegionId::MachineLearning,
        RegionId::InfrastructureSoftware,
        RegionId::SoftwareMachineLearning,
        RegionId::InfrastructureMachineLearning,
        RegionId::InfrastructureSoftwareMachineLearning,
    ];

    /// Stable external name.
    pub const fn slug(self) -> &'static str {
        match self {
            RegionId::Infrastructure => "infrastructure",
            RegionId::Software => "software",
            RegionId::MachineLearning => "machine-learning",
            RegionId::InfrastructureSoftware => "infrastructure-software",
            RegionId::SoftwareMachineLearning => "software-machine-learning",
            RegionId::InfrastructureMachineLearning => "infrastructure-machine-learning",
            RegionId::InfrastructureSoftwareMachineLearning => {
                "infrastructure-software-machine-learning"
            }
        }
    }

    pub fn from_slug(slug: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|r| r.slug() == slug)
    }

    /// Position in [`RegionId::ALL`]; used as hit data.
    pub const fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// The base sets this region belongs to.
    pub const fn coverage(self) -> CoverageSet {
        let bits = match self {
            RegionId::Infrastructure => 0b001,
            RegionId::Software => 0b010,
            RegionId::MachineLearning => 0b100,
            RegionId::InfrastructureSoftware => 0b011,
            RegionId::SoftwareMachineLearning => 0b110,
            RegionId::InfrastructureMachineLearning => 0b101,
            RegionId::InfrastructureSoftwareMachineLearning => 0b111,
        };
        CoverageSet::from_bits_truncate(bits)
    }

    /// The region whose coverage is exactly `set`; `None` for the empty set.
    pub fn from_coverage(set: CoverageSet) -> Option<Self> {
        Self::ALL.into_iter().find(|r| r.coverage() == set)
    }

    /// True for the three single-base regions.
    pub fn is_base(self) -> bool {
        self.coverage().bits().count_ones() == 1
    }

    /// The base sets of this region, in [`BaseSet::ALL`] order.
    pub fn bases(self) -> impl Iterator<Item = BaseSet> {
        let coverage = self.coverage();
        BaseSet::ALL
            .into_iter()
            .filter(move |b| coverage.contains(b.flag()))
    }
}

impl fmt::Display for RegionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

/// Error for an unknown region slug.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownRegion(pub String);

impl fmt::Display for UnknownRegion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown region `{}`", self.0)
    }
}

impl std::error::Error for UnknownRegion {}

impl FromStr for RegionId {
    type Err = UnknownRegion;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_slug(s).ok_or_else(|| UnknownRegion(s.to_owned()))
    }
}

/// Symbolic icon reference; the renderer picks the glyph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Icon {
    Server,
    Code,
    Brain,
    Infinity,
    Chip,
    Database,
    Cycle,
}

impl Icon {
    /// Single-column glyph used in the terminal.
    pub const fn glyph(self) -> char {
        match self {
            Icon::Server => '▤',
            Icon::Code => 'λ',
            Icon::Brain => 'Ψ',
            Icon::Infinity => '∞',
            Icon::Chip => '◈',
            Icon::Database => '≋',
            Icon::Cycle => '⟳',
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Icon::Server => "server",
            Icon::Code => "code",
            Icon::Brain => "brain",
            Icon::Infinity => "infinity",
            Icon::Chip => "chip",
            Icon::Database => "database",
            Icon::Cycle => "cycle",
        }
    }
}

/// Display metadata for one region.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegionDescriptor {
    pub title: &'static str,
    /// Label drawn inside the diagram.
    pub short_label: &'static str,
    pub description: &'static str,
    pub icon: Icon,
    pub accent: Accent,
    /// Display order is meaningful.
    pub topics: &'static [&'static str],
}

static INFRASTRUCTURE: RegionDescriptor = RegionDescriptor {
    title: "Infrastructure Engineering",
    short_label: "Infra",
    description: "Provisioning and operating the compute, storage and networks that \
                  every workload runs on, reliably and at a sensible cost.",
    icon: Icon::Server,
    accent: Accent::Sky,
    topics: &[
        "Linux and networking fundamentals",
        "Cloud platforms",
        "Infrastructure as code",
        "Containers and Kubernetes",
        "Observability",
    ],
};

static SOFTWARE: RegionDescriptor = RegionDescriptor {
    title: "Software Engineering",
    short_label: "Software",
    description: "Designing, writing and maintaining programs that stay correct as \
                  requirements and teams change.",
    icon: Icon::Code,
    accent: Accent::Emerald,
    topics: &[
        "Data structures and algorithms",
        "Version control with Git",
        "Automated testing",
        "API design",
        "Code review",
    ],
};

static MACHINE_LEARNING: RegionDescriptor = RegionDescriptor {
    title: "Machine Learning",
    short_label: "ML",
    description: "Building models that learn patterns from data and measuring \
                  whether they generalize beyond it.",
    icon: Icon::Brain,
    accent: Accent::Violet,
    topics: &[
        "Statistics and probability",
        "Supervised learning",
        "Model evaluation",
        "Deep learning",
        "Feature engineering",
    ],
};

static INFRASTRUCTURE_SOFTWARE: RegionDescriptor = RegionDescriptor {
    title: "DevOps",
    short_label: "DevOps",
    description: "Shortening the path from commit to production by automating \
                  builds, releases and the platforms they land on.",
    icon: Icon::Infinity,
    accent: Accent::Teal,
    topics: &[
        "CI/CD pipelines",
        "Release engineering",
        "Configuration management",
        "Site reliability engineering",
        "Incident response",
    ],
};

static SOFTWARE_MACHINE_LEARNING: RegionDescriptor = RegionDescriptor {
    title: "ML Engineering",
    short_label: "ML Eng",
    description: "Turning research code into maintainable software: training \
                  pipelines, model serving and the tests around them.",
    icon: Icon::Chip,
    accent: Accent::Fuchsia,
    topics: &[
        "Training code as production software",
        "Experiment tracking",
        "Model serving APIs",
        "Reproducible pipelines",
    ],
};

static INFRASTRUCTURE_MACHINE_LEARNING: RegionDescriptor = RegionDescriptor {
    title: "ML Infrastructure",
    short_label: "ML Infra",
    description: "The hardware and data platforms that make large-scale training \
                  and inference possible.",
    icon: Icon::Database,
    accent: Accent::Amber,
    topics: &[
        "GPU clusters and scheduling",
        "Distributed training",
        "Feature stores",
        "Data lakes and warehouses",
    ],
};

static MLOPS: RegionDescriptor = RegionDescriptor {
    title: "MLOps",
    short_label: "MLOps",
    description: "Where all three meet: operating machine learning systems \
                  continuously, from data to deployed model and back.",
    icon: Icon::Cycle,
    accent: Accent::Indigo,
    topics: &[
        "Continuous training",
        "Model registry and versioning",
        "Automated deployment",
        "Monitoring and drift detection",
        "Governance and reproducibility",
    ],
};

/// The descriptor for `id`. Total and pure.
pub fn lookup(id: RegionId) -> &'static RegionDescriptor {
    match id {
        RegionId::Infrastructure => &INFRASTRUCTURE,
        RegionId::Software => &SOFTWARE,
        RegionId::MachineLearning => &MACHINE_LEARNING,
        RegionId::InfrastructureSoftware => &INFRASTRUCTURE_SOFTWARE,
        RegionId::SoftwareMachineLearning => &SOFTWARE_MACHINE_LEARNING,
        RegionId::InfrastructureMachineLearning => &INFRASTRUCTURE_MACHINE_LEARNING,
        RegionId::InfrastructureSoftwareMachineLearning => &MLOPS,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_region_has_complete_descriptor() {
        for id in RegionId::ALL {
            let d = lookup(id);
            assert!(!d.title.is_empty(), "{id} title");
            assert!(!d.short_label.is_empty(), "{id} short label");
            assert!(!d.description.is_empty(), "{id} description");
            assert!(!d.topics.is_empty(), "{id} topics");
            assert!(d.topics.iter().all(|t| !t.is_empty()), "{id} empty topic");
        }
    }

    #[test]
    fn fixed_titles() {
        assert_eq!(lookup(RegionId::Software).title, "Software Engineering");
        assert_eq!(lookup(RegionId::InfrastructureSoftware).title, "DevOps");
    }

    #[test]
    fn slugs_roundtrip_and_are_unique() {
        for id in RegionId::ALL {
            assert_eq!(RegionId::from_slug(id.slug()), Some(id));
            assert_eq!(id.slug().parse::<RegionId>(), Ok(id));
            assert_eq!(id.to_string(), id.slug());
        }
        assert_eq!(
            "devops".parse::<RegionId>(),
            Err(UnknownRegion("devops".to_owned()))
        );
    }

    #[test]
    fn index_matches_all_order() {
        for (i, id) in RegionId::ALL.into_iter().enumerate() {
            assert_eq!(id.index(), i);
            assert_eq!(RegionId::from_index(i), Some(id));
        }
        assert_eq!(RegionId::from_index(7), None);
    }

    #[test]
    fn pairwise_coverage_is_union_of_constituents() {
        let union = |a: RegionId, b: RegionId| a.coverage() | b.coverage();
        assert_eq!(
            RegionId::InfrastructureSoftware.coverage(),
            union(RegionId::Infrastructure, RegionId::Software)
        );
        assert_eq!(
            RegionId::SoftwareMachineLearning.coverage(),
            union(RegionId::Software, RegionId::MachineLearning)
        );
        assert_eq!(
            RegionId::InfrastructureMachineLearning.coverage(),
            union(RegionId::Infrastructure, RegionId::MachineLearning)
        );
    }

    #[test]
    fn triple_coverage_is_union_of_all_bases() {
        let all = BaseSet::ALL
            .into_iter()
            .fold(CoverageSet::empty(), |acc, b| acc | b.region().coverage());
        assert_eq!(RegionId::InfrastructureSoftwareMachineLearning.coverage(), all);
        assert_eq!(all, CoverageSet::all());
    }

    #[test]
    fn coverage_identifies_region() {
        for id in RegionId::ALL {
            assert_eq!(RegionId::from_coverage(id.coverage()), Some(id));
        }
        assert_eq!(RegionId::from_coverage(CoverageSet::empty()), None);
    }

    #[test]
    fn base_regions_cover_themselves() {
        for base in BaseSet::ALL {
            assert_eq!(base.region().coverage(), base.flag());
            assert!(base.region().is_base());
            assert_eq!(base.region().bases().collect::<Vec<_>>(), vec![base]);
        }
        assert!(!RegionId::InfrastructureSoftware.is_base());
    }

    #[test]
    fn accents_are_unique_per_region() {
        for (i, a) in RegionId::ALL.into_iter().enumerate() {
            for b in &RegionId::ALL[i + 1..] {
                assert_ne!(lookup(a).accent, lookup(*b).accent, "{a} vs {b}");
            }
        }
    }

    #[test]
    fn icon_glyphs_are_single_column() {
        for id in RegionId::ALL {
            let glyph = lookup(id).icon.glyph();
            assert_eq!(academy_render::char_width(glyph), 1, "{}", lookup(id).icon.name());
        }
    }
}
