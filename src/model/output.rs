//! Output groups, outputs and their containers

use super::captions::InputLocation;
use super::enums::*;

model! {
    /// Output groups for this Live Event.
    pub struct OutputGroup {
        /// Custom output group name optionally defined by the user.
        "Name" name: string,
        "OutputGroupSettings" output_group_settings: nested(OutputGroupSettings),
        "Outputs" outputs: list(Output),
    }
}

model! {
    /// Output Group Settings
    pub struct OutputGroupSettings {
        "HlsGroupSettings" hls_group_settings: nested(HlsGroupSettings),
        "MsSmoothGroupSettings" ms_smooth_group_settings: nested(MsSmoothGroupSettings),
    }
}

model! {
    /// Hls Group Settings
    pub struct HlsGroupSettings {
        /// Choose one or more ad marker types to pass SCTE35 signals through to this group of Apple HLS outputs.
        "AdMarkers" ad_markers: list(HlsAdMarkers),
        "BaseUrlContent" base_url_content: string,
        "BaseUrlContent1" base_url_content1: string,
        "BaseUrlManifest" base_url_manifest: string,
        "BaseUrlManifest1" base_url_manifest1: string,
        /// Mapping of up to 4 caption channels to caption languages.
        "CaptionLanguageMappings" caption_language_mappings: list(CaptionLanguageMapping),
        "CaptionLanguageSetting" caption_language_setting: enumeration(HlsCaptionLanguageSetting),
        "ClientCache" client_cache: enumeration(HlsClientCache),
        "CodecSpecification" codec_specification: enumeration(HlsCodecSpecification),
        /// For use with encryptionType. This is a 128-bit, 16-byte hex value represented by a 32-character text string.
        "ConstantIv" constant_iv: string,
        /// A directory or HTTP destination for the HLS segments, manifest files, and encryption keys (if enabled).
        "Destination" destination: nested(OutputLocationRef),
        "DirectoryStructure" directory_structure: enumeration(HlsDirectoryStructure),
        "EncryptionType" encryption_type: enumeration(HlsEncryptionType),
        "HlsCdnSettings" hls_cdn_settings: nested(HlsCdnSettings),
        "HlsId3SegmentTagging" hls_id3_segment_tagging: enumeration(HlsId3SegmentTaggingState),
        "IFrameOnlyPlaylists" i_frame_only_playlists: enumeration(IFrameOnlyPlaylistType),
        "IndexNSegments" index_n_segments: int,
        "InputLossAction" input_loss_action: enumeration(InputLossActionForHlsOut),
        "IvInManifest" iv_in_manifest: enumeration(HlsIvInManifest),
        "IvSource" iv_source: enumeration(HlsIvSource),
        "KeepSegments" keep_segments: int,
        "KeyFormat" key_format: string,
        "KeyFormatVersions" key_format_versions: string,
        "KeyProviderSettings" key_provider_settings: nested(KeyProviderSettings),
        "ManifestCompression" manifest_compression: enumeration(HlsManifestCompression),
        "ManifestDurationFormat" manifest_duration_format: enumeration(HlsManifestDurationFormat),
        "MinSegmentLength" min_segment_length: int,
        "Mode" mode: enumeration(HlsMode),
        "OutputSelection" output_selection: enumeration(HlsOutputSelection),
        "ProgramDateTime" program_date_time: enumeration(HlsProgramDateTime),
        /// Period of insertion of EXT-X-PROGRAM-DATE-TIME entry, in seconds.
        "ProgramDateTimePeriod" program_date_time_period: int,
        "RedundantManifest" redundant_manifest: enumeration(HlsRedundantManifest),
        /// Length of MPEG-2 Transport Stream segments to create (in seconds).
        "SegmentLength" segment_length: int,
        "SegmentationMode" segmentation_mode: enumeration(HlsSegmentationMode),
        "SegmentsPerSubdirectory" segments_per_subdirectory: int,
        "StreamInfResolution" stream_inf_resolution: enumeration(HlsStreamInfResolution),
        "TimedMetadataId3Frame" timed_metadata_id3_frame: enumeration(HlsTimedMetadataId3Frame),
        "TimedMetadataId3Period" timed_metadata_id3_period: int,
        "TimestampDeltaMilliseconds" timestamp_delta_milliseconds: int,
        "TsFileMode" ts_file_mode: enumeration(HlsTsFileMode),
    }
}

model! {
    /// Ms Smooth Group Settings
    pub struct MsSmoothGroupSettings {
        /// The ID to include in each message in the sparse track.
        "AcquisitionPointId" acquisition_point_id: string,
        "AudioOnlyTimecodeControl" audio_only_timecode_control: enumeration(SmoothGroupAudioOnlyTimecodeControl),
        "CertificateMode" certificate_mode: enumeration(SmoothGroupCertificateMode),
        /// Number of seconds to wait before retrying connection to the IIS server if the connection is lost.
        "ConnectionRetryInterval" connection_retry_interval: int,
        /// Smooth Streaming publish point on an IIS server.
        "Destination" destination: nested(OutputLocationRef),
        "EventId" event_id: string,
        "EventIdMode" event_id_mode: enumeration(SmoothGroupEventIdMode),
        "EventStopBehavior" event_stop_behavior: enumeration(SmoothGroupEventStopBehavior),
        "FilecacheDuration" filecache_duration: int,
        /// Length of mp4 fragments to generate (in seconds).
        "FragmentLength" fragment_length: int,
        "InputLossAction" input_loss_action: enumeration(InputLossActionForMsSmoothOut),
        "NumRetries" num_retries: int,
        "RestartDelay" restart_delay: int,
        "SegmentationMode" segmentation_mode: enumeration(SmoothGroupSegmentationMode),
        /// Number of milliseconds to delay the output from the second pipeline.
        "SendDelayMs" send_delay_ms: int,
        "SparseTrackType" sparse_track_type: enumeration(SmoothGroupSparseTrackType),
        "StreamManifestBehavior" stream_manifest_behavior: enumeration(SmoothGroupStreamManifestBehavior),
        /// Timestamp offset for the event. Only used if timestampOffsetMode is set to useConfiguredOffset.
        "TimestampOffset" timestamp_offset: string,
        "TimestampOffsetMode" timestamp_offset_mode: enumeration(SmoothGroupTimestampOffsetMode),
    }
}

model! {
    /// Maps a caption channel to an ISO 693-2 language code
    pub struct CaptionLanguageMapping {
        /// The closed caption channel being described by this CaptionLanguageMapping. Each channel mapping must have a unique channel number (maximum of 4)
        "CaptionChannel" caption_channel: int,
        "LanguageCode" language_code: string,
        "LanguageDescription" language_description: string,
    }
}

model! {
    /// Hls Cdn Settings
    pub struct HlsCdnSettings {
        "HlsAkamaiSettings" hls_akamai_settings: nested(HlsAkamaiSettings),
        "HlsBasicPutSettings" hls_basic_put_settings: nested(HlsBasicPutSettings),
        "HlsMediaStoreSettings" hls_media_store_settings: nested(HlsMediaStoreSettings),
        "HlsWebdavSettings" hls_webdav_settings: nested(HlsWebdavSettings),
    }
}

model! {
    /// Hls Akamai Settings
    pub struct HlsAkamaiSettings {
        "ConnectionRetryInterval" connection_retry_interval: int,
        "FilecacheDuration" filecache_duration: int,
        "HttpTransferMode" http_transfer_mode: enumeration(HlsAkamaiHttpTransferMode),
        "NumRetries" num_retries: int,
        "RestartDelay" restart_delay: int,
        /// Salt for authenticated Akamai.
        "Salt" salt: string,
        /// Token parameter for authenticated akamai. If not specified, _gda_ is used.
        "Token" token: string,
    }
}

model! {
    /// Hls Basic Put Settings
    pub struct HlsBasicPutSettings {
        "ConnectionRetryInterval" connection_retry_interval: int,
        "FilecacheDuration" filecache_duration: int,
        "NumRetries" num_retries: int,
        "RestartDelay" restart_delay: int,
    }
}

model! {
    /// Hls Media Store Settings
    pub struct HlsMediaStoreSettings {
        "ConnectionRetryInterval" connection_retry_interval: int,
        "FilecacheDuration" filecache_duration: int,
        "MediaStoreStorageClass" media_store_storage_class: enumeration(HlsMediaStoreStorageClass),
        "NumRetries" num_retries: int,
        "RestartDelay" restart_delay: int,
    }
}

model! {
    /// Hls Webdav Settings
    pub struct HlsWebdavSettings {
        "ConnectionRetryInterval" connection_retry_interval: int,
        "FilecacheDuration" filecache_duration: int,
        "HttpTransferMode" http_transfer_mode: enumeration(HlsWebdavHttpTransferMode),
        "NumRetries" num_retries: int,
        "RestartDelay" restart_delay: int,
    }
}

model! {
    /// Key Provider Settings
    pub struct KeyProviderSettings {
        "StaticKeySettings" static_key_settings: nested(StaticKeySettings),
    }
}

model! {
    /// Static Key Settings
    pub struct StaticKeySettings {
        /// The URL of the license server used for protecting content.
        "KeyProviderServer" key_provider_server: nested(InputLocation),
        /// Static key value as a 32 character hexadecimal string.
        "StaticKeyValue" static_key_value: string,
    }
}

model! {
    /// Reference to an OutputDestination ID defined in the channel
    pub struct OutputLocationRef {
        "DestinationRefId" destination_ref_id: string,
    }
}

model! {
    /// Output settings. There can be multiple outputs within a group.
    pub struct Output {
        /// The names of the AudioDescriptions used as audio sources for this output.
        "AudioDescriptionNames" audio_description_names: list(String),
        /// The names of the CaptionDescriptions used as caption sources for this output.
        "CaptionDescriptionNames" caption_description_names: list(String),
        /// The name used to identify an output.
        "OutputName" output_name: string,
        "OutputSettings" output_settings: nested(OutputSettings),
        /// The name of the VideoDescription used as the source for this output.
        "VideoDescriptionName" video_description_name: string,
    }
}

model! {
    /// Output Settings
    pub struct OutputSettings {
        "HlsOutputSettings" hls_output_settings: nested(HlsOutputSettings),
        "MsSmoothOutputSettings" ms_smooth_output_settings: nested(MsSmoothOutputSettings),
        "UdpOutputSettings" udp_output_settings: nested(UdpOutputSettings),
    }
}

model! {
    /// Hls Output Settings
    pub struct HlsOutputSettings {
        "H265PackagingType" h265_packaging_type: enumeration(HlsH265PackagingType),
        /// String concatenated to the end of the destination filename.
        "NameModifier" name_modifier: string,
        /// String concatenated to end of segment filenames.
        "SegmentModifier" segment_modifier: string,
    }
}

model! {
    /// Ms Smooth Output Settings
    pub struct MsSmoothOutputSettings {
        "H265PackagingType" h265_packaging_type: enumeration(MsSmoothH265PackagingType),
        "NameModifier" name_modifier: string,
    }
}

model! {
    /// Udp Output Settings
    pub struct UdpOutputSettings {
        /// UDP output buffering in milliseconds.
        "BufferMsec" buffer_msec: int,
        "ContainerSettings" container_settings: nested(UdpContainerSettings),
        /// Destination address and port number for RTP or UDP packets.
        "Destination" destination: nested(OutputLocationRef),
    }
}

model! {
    /// Udp Container Settings
    pub struct UdpContainerSettings {
        "M2tsSettings" m2ts_settings: nested(M2tsSettings),
    }
}

model! {
    /// M2ts Settings
    pub struct M2tsSettings {
        "AbsentInputAudioBehavior" absent_input_audio_behavior: enumeration(M2tsAbsentInputAudioBehavior),
        "Arib" arib: enumeration(M2tsArib),
        /// Packet Identifier (PID) for ARIB Captions in the transport stream.
        "AribCaptionsPid" arib_captions_pid: string,
        "AribCaptionsPidControl" arib_captions_pid_control: enumeration(M2tsAribCaptionsPidControl),
        "AudioBufferModel" audio_buffer_model: enumeration(M2tsAudioBufferModel),
        /// The number of audio frames to insert for each PES packet.
        "AudioFramesPerPes" audio_frames_per_pes: int,
        /// Packet Identifier (PID) of the elementary audio stream(s) in the transport stream.
        "AudioPids" audio_pids: string,
        "AudioStreamType" audio_stream_type: enumeration(M2tsAudioStreamType),
        /// The output bitrate of the transport stream in bits per second.
        "Bitrate" bitrate: int,
        "BufferModel" buffer_model: enumeration(M2tsBufferModel),
        "CcDescriptor" cc_descriptor: enumeration(M2tsCcDescriptor),
        "DvbNitSettings" dvb_nit_settings: nested(DvbNitSettings),
        "DvbSdtSettings" dvb_sdt_settings: nested(DvbSdtSettings),
        "DvbSubPids" dvb_sub_pids: string,
        "DvbTdtSettings" dvb_tdt_settings: nested(DvbTdtSettings),
        "DvbTeletextPid" dvb_teletext_pid: string,
        "Ebif" ebif: enumeration(M2tsEbifControl),
        "EbpAudioInterval" ebp_audio_interval: enumeration(M2tsAudioInterval),
        "EbpLookaheadMs" ebp_lookahead_ms: int,
        "EbpPlacement" ebp_placement: enumeration(M2tsEbpPlacement),
        "EcmPid" ecm_pid: string,
        "EsRateInPes" es_rate_in_pes: enumeration(M2tsEsRateInPes),
        "EtvPlatformPid" etv_platform_pid: string,
        "EtvSignalPid" etv_signal_pid: string,
        "FragmentTime" fragment_time: double,
        "Klv" klv: enumeration(M2tsKlv),
        "KlvDataPids" klv_data_pids: string,
        "NielsenId3Behavior" nielsen_id3_behavior: enumeration(M2tsNielsenId3Behavior),
        /// Value in bits per second of extra null packets to insert into the transport stream.
        "NullPacketBitrate" null_packet_bitrate: double,
        "PatInterval" pat_interval: int,
        "PcrControl" pcr_control: enumeration(M2tsPcrControl),
        "PcrPeriod" pcr_period: int,
        "PcrPid" pcr_pid: string,
        "PmtInterval" pmt_interval: int,
        "PmtPid" pmt_pid: string,
        "ProgramNum" program_num: int,
        "RateMode" rate_mode: enumeration(M2tsRateMode),
        "Scte27Pids" scte27_pids: string,
        "Scte35Control" scte35_control: enumeration(M2tsScte35Control),
        "Scte35Pid" scte35_pid: string,
        "SegmentationMarkers" segmentation_markers: enumeration(M2tsSegmentationMarkers),
        "SegmentationStyle" segmentation_style: enumeration(M2tsSegmentationStyle),
        "SegmentationTime" segmentation_time: double,
        "TimedMetadataBehavior" timed_metadata_behavior: enumeration(M2tsTimedMetadataBehavior),
        "TimedMetadataPid" timed_metadata_pid: string,
        "TransportStreamId" transport_stream_id: int,
        "VideoPid" video_pid: string,
    }
}

model! {
    /// DVB Network Information Table (NIT)
    pub struct DvbNitSettings {
        "NetworkId" network_id: int,
        "NetworkName" network_name: string,
        /// The number of milliseconds between instances of this table in the output transport stream.
        "RepInterval" rep_interval: int,
    }
}

model! {
    /// DVB Service Description Table (SDT)
    pub struct DvbSdtSettings {
        "OutputSdt" output_sdt: enumeration(DvbSdtOutputSdt),
        "RepInterval" rep_interval: int,
        "ServiceName" service_name: string,
        "ServiceProviderName" service_provider_name: string,
    }
}

model! {
    /// DVB Time and Date Table (SDT)
    pub struct DvbTdtSettings {
        "RepInterval" rep_interval: int,
    }
}
