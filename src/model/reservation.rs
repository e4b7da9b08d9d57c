//! Reservation and tagging requests and results

use super::enums::*;

model! {
    /// Placeholder documentation for DescribeReservationRequest
    pub struct DescribeReservationRequest {
        /// Unique reservation ID, e.g. '1234567'
        "ReservationId" reservation_id: string,
    }
}

model! {
    /// Placeholder documentation for DescribeReservationResponse
    pub struct DescribeReservationResult {
        /// Unique reservation ARN.
        "Arn" arn: string,
        /// Number of reserved resources
        "Count" count: int,
        /// Currency code for usagePrice and fixedPrice in ISO-4217 format, e.g. 'USD'
        "CurrencyCode" currency_code: string,
        /// Lease duration, e.g. '12'
        "Duration" duration: int,
        "DurationUnits" duration_units: enumeration(OfferingDurationUnits),
        /// Reservation UTC end date and time in ISO-8601 format, e.g. '2019-03-01T00:00:00'
        "End" end: string,
        /// One-time charge for each reserved resource, e.g. '0.0' for a NO_UPFRONT offering
        "FixedPrice" fixed_price: double,
        /// User specified reservation name
        "Name" name: string,
        "OfferingDescription" offering_description: string,
        "OfferingId" offering_id: string,
        "OfferingType" offering_type: enumeration(OfferingType),
        /// AWS region, e.g. 'us-west-2'
        "Region" region: string,
        "ReservationId" reservation_id: string,
        /// Resource configuration details
        "ResourceSpecification" resource_specification: nested(ReservationResourceSpecification),
        /// Reservation UTC start date and time in ISO-8601 format, e.g. '2018-03-01T00:00:00'
        "Start" start: string,
        "State" state: enumeration(ReservationState),
        /// A collection of key-value pairs
        "Tags" tags: map,
        /// Recurring usage charge for each reserved resource, e.g. '157.0'
        "UsagePrice" usage_price: double,
    }
}

model! {
    /// Resource configuration (codec, resolution, bitrate, ...)
    pub struct ReservationResourceSpecification {
        "ChannelClass" channel_class: enumeration(ChannelClass),
        "Codec" codec: enumeration(ReservationCodec),
        "MaximumBitrate" maximum_bitrate: enumeration(ReservationMaximumBitrate),
        "MaximumFramerate" maximum_framerate: enumeration(ReservationMaximumFramerate),
        "Resolution" resolution: enumeration(ReservationResolution),
        "ResourceType" resource_type: enumeration(ReservationResourceType),
        "SpecialFeature" special_feature: enumeration(ReservationSpecialFeature),
        "VideoQuality" video_quality: enumeration(ReservationVideoQuality),
    }
}

model! {
    /// Placeholder documentation for CreateTagsRequest
    pub struct CreateTagsRequest {
        "ResourceArn" resource_arn: string,
        "Tags" tags: map,
    }
}

model! {
    /// Placeholder documentation for ListTagsForResourceRequest
    pub struct ListTagsForResourceRequest {
        "ResourceArn" resource_arn: string,
    }
}

model! {
    /// Placeholder documentation for ListTagsForResourceResponse
    pub struct ListTagsForResourceResult {
        "Tags" tags: map,
    }
}
