//! Fixed framing text for the generated documents.
//!
//! Banner, includes, custom-ABI prototypes and the `Call` entry point are a
//! contract with the host sources and are copied verbatim.

/// Text wrapped around the generated fragments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Framing {
    pub banner: String,
    pub header_prologue: String,
    pub header_epilogue: String,
    pub source_prologue: String,
    pub source_epilogue: String,
}

impl Framing {
    /// Framing expected by the kernel sources.
    pub fn horizon() -> Self {
        Self {
            banner: BANNER.to_string(),
            header_prologue: HEADER_PROLOGUE.to_string(),
            header_epilogue: HEADER_EPILOGUE.to_string(),
            source_prologue: SOURCE_PROLOGUE.to_string(),
            source_epilogue: SOURCE_EPILOGUE.to_string(),
        }
    }

    /// Framing with no surrounding text, for inspecting fragments.
    pub fn bare() -> Self {
        Self {
            banner: String::new(),
            header_prologue: String::new(),
            header_epilogue: String::new(),
            source_prologue: String::new(),
            source_epilogue: String::new(),
        }
    }
}

impl Default for Framing {
    fn default() -> Self {
        Self::horizon()
    }
}

const BANNER: &str = "\
// SPDX-FileCopyrightText: Copyright 2023 yuzu Emulator Project
// SPDX-License-Identifier: GPL-2.0-or-later

// This file is automatically generated using svcgen.
";

const HEADER_PROLOGUE: &str = "
#pragma once

namespace Core {
class System;
}

#include <span>

#include \"common/common_types.h\"
#include \"core/hle/kernel/svc_types.h\"
#include \"core/hle/result.h\"

namespace Kernel::Svc {

// clang-format off
";

const HEADER_EPILOGUE: &str = "
// clang-format on

// Custom ABI.
Result ReplyAndReceiveLight(Core::System& system, Handle handle, uint32_t* args);
Result ReplyAndReceiveLight64From32(Core::System& system, Handle handle, uint32_t* args);
Result ReplyAndReceiveLight64(Core::System& system, Handle handle, uint32_t* args);

Result SendSyncRequestLight(Core::System& system, Handle session_handle, uint32_t* args);
Result SendSyncRequestLight64From32(Core::System& system, Handle session_handle, uint32_t* args);
Result SendSyncRequestLight64(Core::System& system, Handle session_handle, uint32_t* args);

void CallSecureMonitor(Core::System& system, lp64::SecureMonitorArguments* args);
void CallSecureMonitor64From32(Core::System& system, ilp32::SecureMonitorArguments* args);
void CallSecureMonitor64(Core::System& system, lp64::SecureMonitorArguments* args);

// Defined in svc_light_ipc.cpp.
void SvcWrap_ReplyAndReceiveLight64From32(Core::System& system, std::span<uint64_t, 8> args);
void SvcWrap_ReplyAndReceiveLight64(Core::System& system, std::span<uint64_t, 8> args);

void SvcWrap_SendSyncRequestLight64From32(Core::System& system, std::span<uint64_t, 8> args);
void SvcWrap_SendSyncRequestLight64(Core::System& system, std::span<uint64_t, 8> args);

// Defined in svc_secure_monitor_call.cpp.
void SvcWrap_CallSecureMonitor64From32(Core::System& system, std::span<uint64_t, 8> args);
void SvcWrap_CallSecureMonitor64(Core::System& system, std::span<uint64_t, 8> args);

// Perform a supervisor call by index.
void Call(Core::System& system, u32 imm);

} // namespace Kernel::Svc
";

const SOURCE_PROLOGUE: &str = "
#include <type_traits>

#include \"core/arm/arm_interface.h\"
#include \"core/core.h\"
#include \"core/hle/kernel/k_process.h\"
#include \"core/hle/kernel/svc.h\"

namespace Kernel::Svc {

static uint32_t GetArg32(std::span<uint64_t, 8> args, int n) {
    return static_cast<uint32_t>(args[n]);
}

static void SetArg32(std::span<uint64_t, 8> args, int n, uint32_t result) {
    args[n] = result;
}

static uint64_t GetArg64(std::span<uint64_t, 8> args, int n) {
    return args[n];
}

static void SetArg64(std::span<uint64_t, 8> args, int n, uint64_t result) {
    args[n] = result;
}

// Like bit_cast, but handles the case when the source and dest
// are differently-sized.
template <typename To, typename From>
    requires(std::is_trivial_v<To> && std::is_trivially_copyable_v<From>)
static To Convert(const From& from) {
    To to{};

    if constexpr (sizeof(To) >= sizeof(From)) {
        std::memcpy(std::addressof(to), std::addressof(from), sizeof(From));
    } else {
        std::memcpy(std::addressof(to), std::addressof(from), sizeof(To));
    }

    return to;
}

// clang-format off
";

const SOURCE_EPILOGUE: &str = "
// clang-format on

void Call(Core::System& system, u32 imm) {
    auto& kernel = system.Kernel();
    auto& process = GetCurrentProcess(kernel);

    std::array<uint64_t, 8> args;
    kernel.CurrentPhysicalCore().SaveSvcArguments(process, args);
    kernel.EnterSVCProfile();

    if (process.Is64Bit()) {
        Call64(system, imm, args);
    } else {
        Call32(system, imm, args);
    }

    kernel.ExitSVCProfile();
    kernel.CurrentPhysicalCore().LoadSvcArguments(process, args);
}

} // namespace Kernel::Svc
";
