//! Citation intent tags
//!
//! The type or nature of a citation, both factually and rhetorically.
//! This is a flat, closed tag set versioned with the schema: each value
//! encodes as its own tag string, bare, with no attributes and no further
//! dispatch. Derived from the CiTO ontology.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The type or nature of a citation relationship
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CitationIntent {
    AgreesWith,
    CitesAsAuthority,
    CitesAsDataSource,
    CitesAsEvidence,
    CitesAsMetadataDocument,
    CitesAsPotentialSolution,
    CitesAsRecommendedReading,
    CitesAsRelated,
    CitesAsSourceDocument,
    CitesForInformation,
    Compiles,
    Confirms,
    ContainsAssertionFrom,
    Corrects,
    Credits,
    Critiques,
    Derides,
    Describes,
    DisagreesWith,
    Discusses,
    Disputes,
    Documents,
    Extends,
    GivesBackgroundTo,
    GivesSupportTo,
    HasReplyFrom,
    IncludesExcerptFrom,
    IncludesQuotationFrom,
    IsAgreedWithBy,
    IsCitedAsAuthorityBy,
    IsCitedAsDataSourceBy,
    IsCitedAsEvidenceBy,
    IsCitedAsMetadataDocumentBy,
    IsCitedAsPotentialSolutionBy,
    IsCitedAsRecommendedReadingBy,
    IsCitedAsRelatedBy,
    IsCitedAsSourceDocumentBy,
    IsCitedBy,
    IsCitedForInformationBy,
    IsCompiledBy,
    IsConfirmedBy,
    IsCorrectedBy,
    IsCreditedBy,
    IsCritiquedBy,
    IsDeridedBy,
    IsDescribedBy,
    IsDisagreedWithBy,
    IsDiscussedBy,
    IsDisputedBy,
    IsDocumentedBy,
    IsExtendedBy,
    IsLinkedToBy,
    IsParodiedBy,
    IsPlagiarizedBy,
    IsQualifiedBy,
    IsRefutedBy,
    IsRetractedBy,
    IsReviewedBy,
    IsRidiculedBy,
    IsSpeculatedOnBy,
    IsSupportedBy,
    IsUpdatedBy,
    Likes,
    LinksTo,
    ObtainsBackgroundFrom,
    ObtainsSupportFrom,
    Parodies,
    Plagiarizes,
    ProvidesAssertionFor,
    ProvidesConclusionsFor,
    ProvidesDataFor,
    ProvidesExcerptFor,
    ProvidesMethodFor,
    ProvidesQuotationFor,
    Qualifies,
    Refutes,
    RepliesTo,
    Retracts,
    Reviews,
    Ridicules,
    SharesAuthorInstitutionWith,
    SharesAuthorWith,
    SharesFundingAgencyWith,
    SharesJournalWith,
    SharesPublicationVenueWith,
    SpeculatesOn,
    Supports,
    Updates,
    UsesConclusionsFrom,
    UsesDataFrom,
    UsesMethodIn,
}

impl CitationIntent {
    /// Every tag in the closed set, in schema order
    pub const ALL: &'static [CitationIntent] = &[
        CitationIntent::AgreesWith,
        CitationIntent::CitesAsAuthority,
        CitationIntent::CitesAsDataSource,
        CitationIntent::CitesAsEvidence,
        CitationIntent::CitesAsMetadataDocument,
        CitationIntent::CitesAsPotentialSolution,
        CitationIntent::CitesAsRecommendedReading,
        CitationIntent::CitesAsRelated,
        CitationIntent::CitesAsSourceDocument,
        CitationIntent::CitesForInformation,
        CitationIntent::Compiles,
        CitationIntent::Confirms,
        CitationIntent::ContainsAssertionFrom,
        CitationIntent::Corrects,
        CitationIntent::Credits,
        CitationIntent::Critiques,
        CitationIntent::Derides,
        CitationIntent::Describes,
        CitationIntent::DisagreesWith,
        CitationIntent::Discusses,
        CitationIntent::Disputes,
        CitationIntent::Documents,
        CitationIntent::Extends,
        CitationIntent::GivesBackgroundTo,
        CitationIntent::GivesSupportTo,
        CitationIntent::HasReplyFrom,
        CitationIntent::IncludesExcerptFrom,
        CitationIntent::IncludesQuotationFrom,
        CitationIntent::IsAgreedWithBy,
        CitationIntent::IsCitedAsAuthorityBy,
        CitationIntent::IsCitedAsDataSourceBy,
        CitationIntent::IsCitedAsEvidenceBy,
        CitationIntent::IsCitedAsMetadataDocumentBy,
        CitationIntent::IsCitedAsPotentialSolutionBy,
        CitationIntent::IsCitedAsRecommendedReadingBy,
        CitationIntent::IsCitedAsRelatedBy,
        CitationIntent::IsCitedAsSourceDocumentBy,
        CitationIntent::IsCitedBy,
        CitationIntent::IsCitedForInformationBy,
        CitationIntent::IsCompiledBy,
        CitationIntent::IsConfirmedBy,
        CitationIntent::IsCorrectedBy,
        CitationIntent::IsCreditedBy,
        CitationIntent::IsCritiquedBy,
        CitationIntent::IsDeridedBy,
        CitationIntent::IsDescribedBy,
        CitationIntent::IsDisagreedWithBy,
        CitationIntent::IsDiscussedBy,
        CitationIntent::IsDisputedBy,
        CitationIntent::IsDocumentedBy,
        CitationIntent::IsExtendedBy,
        CitationIntent::IsLinkedToBy,
        CitationIntent::IsParodiedBy,
        CitationIntent::IsPlagiarizedBy,
        CitationIntent::IsQualifiedBy,
        CitationIntent::IsRefutedBy,
        CitationIntent::IsRetractedBy,
        CitationIntent::IsReviewedBy,
        CitationIntent::IsRidiculedBy,
        CitationIntent::IsSpeculatedOnBy,
        CitationIntent::IsSupportedBy,
        CitationIntent::IsUpdatedBy,
        CitationIntent::Likes,
        CitationIntent::LinksTo,
        CitationIntent::ObtainsBackgroundFrom,
        CitationIntent::ObtainsSupportFrom,
        CitationIntent::Parodies,
        CitationIntent::Plagiarizes,
        CitationIntent::ProvidesAssertionFor,
        CitationIntent::ProvidesConclusionsFor,
        CitationIntent::ProvidesDataFor,
        CitationIntent::ProvidesExcerptFor,
        CitationIntent::ProvidesMethodFor,
        CitationIntent::ProvidesQuotationFor,
        CitationIntent::Qualifies,
        CitationIntent::Refutes,
        CitationIntent::RepliesTo,
        CitationIntent::Retracts,
        CitationIntent::Reviews,
        CitationIntent::Ridicules,
        CitationIntent::SharesAuthorInstitutionWith,
        CitationIntent::SharesAuthorWith,
        CitationIntent::SharesFundingAgencyWith,
        CitationIntent::SharesJournalWith,
        CitationIntent::SharesPublicationVenueWith,
        CitationIntent::SpeculatesOn,
        CitationIntent::Supports,
        CitationIntent::Updates,
        CitationIntent::UsesConclusionsFrom,
        CitationIntent::UsesDataFrom,
        CitationIntent::UsesMethodIn,
    ];

    /// The tag string this value encodes as
    pub fn as_str(&self) -> &'static str {
        match self {
            CitationIntent::AgreesWith => "AgreesWith",
            CitationIntent::CitesAsAuthority => "CitesAsAuthority",
            CitationIntent::CitesAsDataSource => "CitesAsDataSource",
            CitationIntent::CitesAsEvidence => "CitesAsEvidence",
            CitationIntent::CitesAsMetadataDocument => "CitesAsMetadataDocument",
            CitationIntent::CitesAsPotentialSolution => "CitesAsPotentialSolution",
            CitationIntent::CitesAsRecommendedReading => "CitesAsRecommendedReading",
            CitationIntent::CitesAsRelated => "CitesAsRelated",
            CitationIntent::CitesAsSourceDocument => "CitesAsSourceDocument",
            CitationIntent::CitesForInformation => "CitesForInformation",
            CitationIntent::Compiles => "Compiles",
            CitationIntent::Confirms => "Confirms",
            CitationIntent::ContainsAssertionFrom => "ContainsAssertionFrom",
            CitationIntent::Corrects => "Corrects",
            CitationIntent::Credits => "Credits",
            CitationIntent::Critiques => "Critiques",
            CitationIntent::Derides => "Derides",
            CitationIntent::Describes => "Describes",
            CitationIntent::DisagreesWith => "DisagreesWith",
            CitationIntent::Discusses => "Discusses",
            CitationIntent::Disputes => "Disputes",
            CitationIntent::Documents => "Documents",
            CitationIntent::Extends => "Extends",
            CitationIntent::GivesBackgroundTo => "GivesBackgroundTo",
            CitationIntent::GivesSupportTo => "GivesSupportTo",
            CitationIntent::HasReplyFrom => "HasReplyFrom",
            CitationIntent::IncludesExcerptFrom => "IncludesExcerptFrom",
            CitationIntent::IncludesQuotationFrom => "IncludesQuotationFrom",
            CitationIntent::IsAgreedWithBy => "IsAgreedWithBy",
            CitationIntent::IsCitedAsAuthorityBy => "IsCitedAsAuthorityBy",
            CitationIntent::IsCitedAsDataSourceBy => "IsCitedAsDataSourceBy",
            CitationIntent::IsCitedAsEvidenceBy => "IsCitedAsEvidenceBy",
            CitationIntent::IsCitedAsMetadataDocumentBy => "IsCitedAsMetadataDocumentBy",
            CitationIntent::IsCitedAsPotentialSolutionBy => "IsCitedAsPotentialSolutionBy",
            CitationIntent::IsCitedAsRecommendedReadingBy => "IsCitedAsRecommendedReadingBy",
            CitationIntent::IsCitedAsRelatedBy => "IsCitedAsRelatedBy",
            CitationIntent::IsCitedAsSourceDocumentBy => "IsCitedAsSourceDocumentBy",
            CitationIntent::IsCitedBy => "IsCitedBy",
            CitationIntent::IsCitedForInformationBy => "IsCitedForInformationBy",
            CitationIntent::IsCompiledBy => "IsCompiledBy",
            CitationIntent::IsConfirmedBy => "IsConfirmedBy",
            CitationIntent::IsCorrectedBy => "IsCorrectedBy",
            CitationIntent::IsCreditedBy => "IsCreditedBy",
            CitationIntent::IsCritiquedBy => "IsCritiquedBy",
            CitationIntent::IsDeridedBy => "IsDeridedBy",
            CitationIntent::IsDescribedBy => "IsDescribedBy",
            CitationIntent::IsDisagreedWithBy => "IsDisagreedWithBy",
            CitationIntent::IsDiscussedBy => "IsDiscussedBy",
            CitationIntent::IsDisputedBy => "IsDisputedBy",
            CitationIntent::IsDocumentedBy => "IsDocumentedBy",
            CitationIntent::IsExtendedBy => "IsExtendedBy",
            CitationIntent::IsLinkedToBy => "IsLinkedToBy",
            CitationIntent::IsParodiedBy => "IsParodiedBy",
            CitationIntent::IsPlagiarizedBy => "IsPlagiarizedBy",
            CitationIntent::IsQualifiedBy => "IsQualifiedBy",
            CitationIntent::IsRefutedBy => "IsRefutedBy",
            CitationIntent::IsRetractedBy => "IsRetractedBy",
            CitationIntent::IsReviewedBy => "IsReviewedBy",
            CitationIntent::IsRidiculedBy => "IsRidiculedBy",
            CitationIntent::IsSpeculatedOnBy => "IsSpeculatedOnBy",
            CitationIntent::IsSupportedBy => "IsSupportedBy",
            CitationIntent::IsUpdatedBy => "IsUpdatedBy",
            CitationIntent::Likes => "Likes",
            CitationIntent::LinksTo => "LinksTo",
            CitationIntent::ObtainsBackgroundFrom => "ObtainsBackgroundFrom",
            CitationIntent::ObtainsSupportFrom => "ObtainsSupportFrom",
            CitationIntent::Parodies => "Parodies",
            CitationIntent::Plagiarizes => "Plagiarizes",
            CitationIntent::ProvidesAssertionFor => "ProvidesAssertionFor",
            CitationIntent::ProvidesConclusionsFor => "ProvidesConclusionsFor",
            CitationIntent::ProvidesDataFor => "ProvidesDataFor",
            CitationIntent::ProvidesExcerptFor => "ProvidesExcerptFor",
            CitationIntent::ProvidesMethodFor => "ProvidesMethodFor",
            CitationIntent::ProvidesQuotationFor => "ProvidesQuotationFor",
            CitationIntent::Qualifies => "Qualifies",
            CitationIntent::Refutes => "Refutes",
            CitationIntent::RepliesTo => "RepliesTo",
            CitationIntent::Retracts => "Retracts",
            CitationIntent::Reviews => "Reviews",
            CitationIntent::Ridicules => "Ridicules",
            CitationIntent::SharesAuthorInstitutionWith => "SharesAuthorInstitutionWith",
            CitationIntent::SharesAuthorWith => "SharesAuthorWith",
            CitationIntent::SharesFundingAgencyWith => "SharesFundingAgencyWith",
            CitationIntent::SharesJournalWith => "SharesJournalWith",
            CitationIntent::SharesPublicationVenueWith => "SharesPublicationVenueWith",
            CitationIntent::SpeculatesOn => "SpeculatesOn",
            CitationIntent::Supports => "Supports",
            CitationIntent::Updates => "Updates",
            CitationIntent::UsesConclusionsFrom => "UsesConclusionsFrom",
            CitationIntent::UsesDataFrom => "UsesDataFrom",
            CitationIntent::UsesMethodIn => "UsesMethodIn",
        }
    }

    /// Resolve a tag string against the closed set
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "AgreesWith" => Some(CitationIntent::AgreesWith),
            "CitesAsAuthority" => Some(CitationIntent::CitesAsAuthority),
            "CitesAsDataSource" => Some(CitationIntent::CitesAsDataSource),
            "CitesAsEvidence" => Some(CitationIntent::CitesAsEvidence),
            "CitesAsMetadataDocument" => Some(CitationIntent::CitesAsMetadataDocument),
            "CitesAsPotentialSolution" => Some(CitationIntent::CitesAsPotentialSolution),
            "CitesAsRecommendedReading" => Some(CitationIntent::CitesAsRecommendedReading),
            "CitesAsRelated" => Some(CitationIntent::CitesAsRelated),
            "CitesAsSourceDocument" => Some(CitationIntent::CitesAsSourceDocument),
            "CitesForInformation" => Some(CitationIntent::CitesForInformation),
            "Compiles" => Some(CitationIntent::Compiles),
            "Confirms" => Some(CitationIntent::Confirms),
            "ContainsAssertionFrom" => Some(CitationIntent::ContainsAssertionFrom),
            "Corrects" => Some(CitationIntent::Corrects),
            "Credits" => Some(CitationIntent::Credits),
            "Critiques" => Some(CitationIntent::Critiques),
            "Derides" => Some(CitationIntent::Derides),
            "Describes" => Some(CitationIntent::Describes),
            "DisagreesWith" => Some(CitationIntent::DisagreesWith),
            "Discusses" => Some(CitationIntent::Discusses),
            "Disputes" => Some(CitationIntent::Disputes),
            "Documents" => Some(CitationIntent::Documents),
            "Extends" => Some(CitationIntent::Extends),
            "GivesBackgroundTo" => Some(CitationIntent::GivesBackgroundTo),
            "GivesSupportTo" => Some(CitationIntent::GivesSupportTo),
            "HasReplyFrom" => Some(CitationIntent::HasReplyFrom),
            "IncludesExcerptFrom" => Some(CitationIntent::IncludesExcerptFrom),
            "IncludesQuotationFrom" => Some(CitationIntent::IncludesQuotationFrom),
            "IsAgreedWithBy" => Some(CitationIntent::IsAgreedWithBy),
            "IsCitedAsAuthorityBy" => Some(CitationIntent::IsCitedAsAuthorityBy),
            "IsCitedAsDataSourceBy" => Some(CitationIntent::IsCitedAsDataSourceBy),
            "IsCitedAsEvidenceBy" => Some(CitationIntent::IsCitedAsEvidenceBy),
            "IsCitedAsMetadataDocumentBy" => Some(CitationIntent::IsCitedAsMetadataDocumentBy),
            "IsCitedAsPotentialSolutionBy" => Some(CitationIntent::IsCitedAsPotentialSolutionBy),
            "IsCitedAsRecommendedReadingBy" => Some(CitationIntent::IsCitedAsRecommendedReadingBy),
            "IsCitedAsRelatedBy" => Some(CitationIntent::IsCitedAsRelatedBy),
            "IsCitedAsSourceDocumentBy" => Some(CitationIntent::IsCitedAsSourceDocumentBy),
            "IsCitedBy" => Some(CitationIntent::IsCitedBy),
            "IsCitedForInformationBy" => Some(CitationIntent::IsCitedForInformationBy),
            "IsCompiledBy" => Some(CitationIntent::IsCompiledBy),
            "IsConfirmedBy" => Some(CitationIntent::IsConfirmedBy),
            "IsCorrectedBy" => Some(CitationIntent::IsCorrectedBy),
            "IsCreditedBy" => Some(CitationIntent::IsCreditedBy),
            "IsCritiquedBy" => Some(CitationIntent::IsCritiquedBy),
            "IsDeridedBy" => Some(CitationIntent::IsDeridedBy),
            "IsDescribedBy" => Some(CitationIntent::IsDescribedBy),
            "IsDisagreedWithBy" => Some(CitationIntent::IsDisagreedWithBy),
            "IsDiscussedBy" => Some(CitationIntent::IsDiscussedBy),
            "IsDisputedBy" => Some(CitationIntent::IsDisputedBy),
            "IsDocumentedBy" => Some(CitationIntent::IsDocumentedBy),
            "IsExtendedBy" => Some(CitationIntent::IsExtendedBy),
            "IsLinkedToBy" => Some(CitationIntent::IsLinkedToBy),
            "IsParodiedBy" => Some(CitationIntent::IsParodiedBy),
            "IsPlagiarizedBy" => Some(CitationIntent::IsPlagiarizedBy),
            "IsQualifiedBy" => Some(CitationIntent::IsQualifiedBy),
            "IsRefutedBy" => Some(CitationIntent::IsRefutedBy),
            "IsRetractedBy" => Some(CitationIntent::IsRetractedBy),
            "IsReviewedBy" => Some(CitationIntent::IsReviewedBy),
            "IsRidiculedBy" => Some(CitationIntent::IsRidiculedBy),
            "IsSpeculatedOnBy" => Some(CitationIntent::IsSpeculatedOnBy),
            "IsSupportedBy" => Some(CitationIntent::IsSupportedBy),
            "IsUpdatedBy" => Some(CitationIntent::IsUpdatedBy),
            "Likes" => Some(CitationIntent::Likes),
            "LinksTo" => Some(CitationIntent::LinksTo),
            "ObtainsBackgroundFrom" => Some(CitationIntent::ObtainsBackgroundFrom),
            "ObtainsSupportFrom" => Some(CitationIntent::ObtainsSupportFrom),
            "Parodies" => Some(CitationIntent::Parodies),
            "Plagiarizes" => Some(CitationIntent::Plagiarizes),
            "ProvidesAssertionFor" => Some(CitationIntent::ProvidesAssertionFor),
            "ProvidesConclusionsFor" => Some(CitationIntent::ProvidesConclusionsFor),
            "ProvidesDataFor" => Some(CitationIntent::ProvidesDataFor),
            "ProvidesExcerptFor" => Some(CitationIntent::ProvidesExcerptFor),
            "ProvidesMethodFor" => Some(CitationIntent::ProvidesMethodFor),
            "ProvidesQuotationFor" => Some(CitationIntent::ProvidesQuotationFor),
            "Qualifies" => Some(CitationIntent::Qualifies),
            "Refutes" => Some(CitationIntent::Refutes),
            "RepliesTo" => Some(CitationIntent::RepliesTo),
            "Retracts" => Some(CitationIntent::Retracts),
            "Reviews" => Some(CitationIntent::Reviews),
            "Ridicules" => Some(CitationIntent::Ridicules),
            "SharesAuthorInstitutionWith" => Some(CitationIntent::SharesAuthorInstitutionWith),
            "SharesAuthorWith" => Some(CitationIntent::SharesAuthorWith),
            "SharesFundingAgencyWith" => Some(CitationIntent::SharesFundingAgencyWith),
            "SharesJournalWith" => Some(CitationIntent::SharesJournalWith),
            "SharesPublicationVenueWith" => Some(CitationIntent::SharesPublicationVenueWith),
            "SpeculatesOn" => Some(CitationIntent::SpeculatesOn),
            "Supports" => Some(CitationIntent::Supports),
            "Updates" => Some(CitationIntent::Updates),
            "UsesConclusionsFrom" => Some(CitationIntent::UsesConclusionsFrom),
            "UsesDataFrom" => Some(CitationIntent::UsesDataFrom),
            "UsesMethodIn" => Some(CitationIntent::UsesMethodIn),
            _ => None,
        }
    }
}

impl fmt::Display for CitationIntent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
