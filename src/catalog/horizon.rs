//! Built-in kernel supervisor-call catalog.
//!
//! Prototypes are kept exactly as the kernel declares them; gaps in the id
//! sequence are reserved calls.

/// `(id, signature)` for every supervisor call, in id order.
pub const SUPERVISOR_CALLS: &[(u32, &str)] = &[
    (0x01, "Result SetHeapSize(Address* out_address, Size size);"),
    (0x02, "Result SetMemoryPermission(Address address, Size size, MemoryPermission perm);"),
    (0x03, "Result SetMemoryAttribute(Address address, Size size, uint32_t mask, uint32_t attr);"),
    (0x04, "Result MapMemory(Address dst_address, Address src_address, Size size);"),
    (0x05, "Result UnmapMemory(Address dst_address, Address src_address, Size size);"),
    (0x06, "Result QueryMemory(Address out_memory_info, PageInfo* out_page_info, Address address);"),
    (0x07, "void ExitProcess();"),
    (0x08, "Result CreateThread(Handle* out_handle, ThreadFunc func, Address arg, Address stack_bottom, int32_t priority, int32_t core_id);"),
    (0x09, "Result StartThread(Handle thread_handle);"),
    (0x0A, "void ExitThread();"),
    (0x0B, "void SleepThread(int64_t ns);"),
    (0x0C, "Result GetThreadPriority(int32_t* out_priority, Handle thread_handle);"),
    (0x0D, "Result SetThreadPriority(Handle thread_handle, int32_t priority);"),
    (0x0E, "Result GetThreadCoreMask(int32_t* out_core_id, uint64_t* out_affinity_mask, Handle thread_handle);"),
    (0x0F, "Result SetThreadCoreMask(Handle thread_handle, int32_t core_id, uint64_t affinity_mask);"),
    (0x10, "int32_t GetCurrentProcessorNumber();"),
    (0x11, "Result SignalEvent(Handle event_handle);"),
    (0x12, "Result ClearEvent(Handle event_handle);"),
    (0x13, "Result MapSharedMemory(Handle shmem_handle, Address address, Size size, MemoryPermission map_perm);"),
    (0x14, "Result UnmapSharedMemory(Handle shmem_handle, Address address, Size size);"),
    (0x15, "Result CreateTransferMemory(Handle* out_handle, Address address, Size size, MemoryPermission map_perm);"),
    (0x16, "Result CloseHandle(Handle handle);"),
    (0x17, "Result ResetSignal(Handle handle);"),
    (0x18, "Result WaitSynchronization(int32_t* out_index, Address handles, int32_t num_handles, int64_t timeout_ns);"),
    (0x19, "Result CancelSynchronization(Handle handle);"),
    (0x1A, "Result ArbitrateLock(Handle thread_handle, Address address, uint32_t tag);"),
    (0x1B, "Result ArbitrateUnlock(Address address);"),
    (0x1C, "Result WaitProcessWideKeyAtomic(Address address, Address cv_key, uint32_t tag, int64_t timeout_ns);"),
    (0x1D, "void SignalProcessWideKey(Address cv_key, int32_t count);"),
    (0x1E, "int64_t GetSystemTick();"),
    (0x1F, "Result ConnectToNamedPort(Handle* out_handle, Address name);"),
    (0x20, "Result SendSyncRequestLight(Handle session_handle);"),
    (0x21, "Result SendSyncRequest(Handle session_handle);"),
    (0x22, "Result SendSyncRequestWithUserBuffer(Address message_buffer, Size message_buffer_size, Handle session_handle);"),
    (0x23, "Result SendAsyncRequestWithUserBuffer(Handle* out_event_handle, Address message_buffer, Size message_buffer_size, Handle session_handle);"),
    (0x24, "Result GetProcessId(uint64_t* out_process_id, Handle process_handle);"),
    (0x25, "Result GetThreadId(uint64_t* out_thread_id, Handle thread_handle);"),
    (0x26, "void Break(BreakReason break_reason, Address arg, Size size);"),
    (0x27, "Result OutputDebugString(Address debug_str, Size len);"),
    (0x28, "void ReturnFromException(Result result);"),
    (0x29, "Result GetInfo(uint64_t* out, InfoType info_type, Handle handle, uint64_t info_subtype);"),
    (0x2A, "void FlushEntireDataCache();"),
    (0x2B, "Result FlushDataCache(Address address, Size size);"),
    (0x2C, "Result MapPhysicalMemory(Address address, Size size);"),
    (0x2D, "Result UnmapPhysicalMemory(Address address, Size size);"),
    (0x2E, "Result GetDebugFutureThreadInfo(LastThreadContext* out_context, uint64_t* out_thread_id, Handle debug_handle, int64_t ns);"),
    (0x2F, "Result GetLastThreadInfo(LastThreadContext* out_context, Address* out_tls_address, uint32_t* out_flags);"),
    (0x30, "Result GetResourceLimitLimitValue(int64_t* out_limit_value, Handle resource_limit_handle, LimitableResource which);"),
    (0x31, "Result GetResourceLimitCurrentValue(int64_t* out_current_value, Handle resource_limit_handle, LimitableResource which);"),
    (0x32, "Result SetThreadActivity(Handle thread_handle, ThreadActivity thread_activity);"),
    (0x33, "Result GetThreadContext3(Address out_context, Handle thread_handle);"),
    (0x34, "Result WaitForAddress(Address address, ArbitrationType arb_type, int32_t value, int64_t timeout_ns);"),
    (0x35, "Result SignalToAddress(Address address, SignalType signal_type, int32_t value, int32_t count);"),
    (0x36, "void SynchronizePreemptionState();"),
    (0x37, "Result GetResourceLimitPeakValue(int64_t* out_peak_value, Handle resource_limit_handle, LimitableResource which);"),

    (0x39, "Result CreateIoPool(Handle* out_handle, IoPoolType which);"),
    (0x3A, "Result CreateIoRegion(Handle* out_handle, Handle io_pool, PhysicalAddress physical_address, Size size, MemoryMapping mapping, MemoryPermission perm);"),

    (0x3C, "void KernelDebug(KernelDebugType kern_debug_type, uint64_t arg0, uint64_t arg1, uint64_t arg2);"),
    (0x3D, "void ChangeKernelTraceState(KernelTraceState kern_trace_state);"),

    (0x40, "Result CreateSession(Handle* out_server_session_handle, Handle* out_client_session_handle, bool is_light, Address name);"),
    (0x41, "Result AcceptSession(Handle* out_handle, Handle port);"),
    (0x42, "Result ReplyAndReceiveLight(Handle handle);"),
    (0x43, "Result ReplyAndReceive(int32_t* out_index, Address handles, int32_t num_handles, Handle reply_target, int64_t timeout_ns);"),
    (0x44, "Result ReplyAndReceiveWithUserBuffer(int32_t* out_index, Address message_buffer, Size message_buffer_size, Address handles, int32_t num_handles, Handle reply_target, int64_t timeout_ns);"),
    (0x45, "Result CreateEvent(Handle* out_write_handle, Handle* out_read_handle);"),
    (0x46, "Result MapIoRegion(Handle io_region, Address address, Size size, MemoryPermission perm);"),
    (0x47, "Result UnmapIoRegion(Handle io_region, Address address, Size size);"),
    (0x48, "Result MapPhysicalMemoryUnsafe(Address address, Size size);"),
    (0x49, "Result UnmapPhysicalMemoryUnsafe(Address address, Size size);"),
    (0x4A, "Result SetUnsafeLimit(Size limit);"),
    (0x4B, "Result CreateCodeMemory(Handle* out_handle, Address address, Size size);"),
    (0x4C, "Result ControlCodeMemory(Handle code_memory_handle, CodeMemoryOperation operation, uint64_t address, uint64_t size, MemoryPermission perm);"),
    (0x4D, "void SleepSystem();"),
    (0x4E, "Result ReadWriteRegister(uint32_t* out_value, PhysicalAddress address, uint32_t mask, uint32_t value);"),
    (0x4F, "Result SetProcessActivity(Handle process_handle, ProcessActivity process_activity);"),
    (0x50, "Result CreateSharedMemory(Handle* out_handle, Size size, MemoryPermission owner_perm, MemoryPermission remote_perm);"),
    (0x51, "Result MapTransferMemory(Handle trmem_handle, Address address, Size size, MemoryPermission owner_perm);"),
    (0x52, "Result UnmapTransferMemory(Handle trmem_handle, Address address, Size size);"),
    (0x53, "Result CreateInterruptEvent(Handle* out_read_handle, int32_t interrupt_id, InterruptType interrupt_type);"),
    (0x54, "Result QueryPhysicalAddress(PhysicalMemoryInfo* out_info, Address address);"),
    (0x55, "Result QueryIoMapping(Address* out_address, Size* out_size, PhysicalAddress physical_address, Size size);"),
    (0x56, "Result CreateDeviceAddressSpace(Handle* out_handle, uint64_t das_address, uint64_t das_size);"),
    (0x57, "Result AttachDeviceAddressSpace(DeviceName device_name, Handle das_handle);"),
    (0x58, "Result DetachDeviceAddressSpace(DeviceName device_name, Handle das_handle);"),
    (0x59, "Result MapDeviceAddressSpaceByForce(Handle das_handle, Handle process_handle, uint64_t process_address, Size size, uint64_t device_address, uint32_t option);"),
    (0x5A, "Result MapDeviceAddressSpaceAligned(Handle das_handle, Handle process_handle, uint64_t process_address, Size size, uint64_t device_address, uint32_t option);"),
    (0x5C, "Result UnmapDeviceAddressSpace(Handle das_handle, Handle process_handle, uint64_t process_address, Size size, uint64_t device_address);"),
    (0x5D, "Result InvalidateProcessDataCache(Handle process_handle, uint64_t address, uint64_t size);"),
    (0x5E, "Result StoreProcessDataCache(Handle process_handle, uint64_t address, uint64_t size);"),
    (0x5F, "Result FlushProcessDataCache(Handle process_handle, uint64_t address, uint64_t size);"),
    (0x60, "Result DebugActiveProcess(Handle* out_handle, uint64_t process_id);"),
    (0x61, "Result BreakDebugProcess(Handle debug_handle);"),
    (0x62, "Result TerminateDebugProcess(Handle debug_handle);"),
    (0x63, "Result GetDebugEvent(Address out_info, Handle debug_handle);"),
    (0x64, "Result ContinueDebugEvent(Handle debug_handle, uint32_t flags, Address thread_ids, int32_t num_thread_ids);"),
    (0x65, "Result GetProcessList(int32_t* out_num_processes, Address out_process_ids, int32_t max_out_count);"),
    (0x66, "Result GetThreadList(int32_t* out_num_threads, Address out_thread_ids, int32_t max_out_count, Handle debug_handle);"),
    (0x67, "Result GetDebugThreadContext(Address out_context, Handle debug_handle, uint64_t thread_id, uint32_t context_flags);"),
    (0x68, "Result SetDebugThreadContext(Handle debug_handle, uint64_t thread_id, Address context, uint32_t context_flags);"),
    (0x69, "Result QueryDebugProcessMemory(Address out_memory_info, PageInfo* out_page_info, Handle process_handle, Address address);"),
    (0x6A, "Result ReadDebugProcessMemory(Address buffer, Handle debug_handle, Address address, Size size);"),
    (0x6B, "Result WriteDebugProcessMemory(Handle debug_handle, Address buffer, Address address, Size size);"),
    (0x6C, "Result SetHardwareBreakPoint(HardwareBreakPointRegisterName name, uint64_t flags, uint64_t value);"),
    (0x6D, "Result GetDebugThreadParam(uint64_t* out_64, uint32_t* out_32, Handle debug_handle, uint64_t thread_id, DebugThreadParam param);"),

    (0x6F, "Result GetSystemInfo(uint64_t* out, SystemInfoType info_type, Handle handle, uint64_t info_subtype);"),
    (0x70, "Result CreatePort(Handle* out_server_handle, Handle* out_client_handle, int32_t max_sessions, bool is_light, Address name);"),
    (0x71, "Result ManageNamedPort(Handle* out_server_handle, Address name, int32_t max_sessions);"),
    (0x72, "Result ConnectToPort(Handle* out_handle, Handle port);"),
    (0x73, "Result SetProcessMemoryPermission(Handle process_handle, uint64_t address, uint64_t size, MemoryPermission perm);"),
    (0x74, "Result MapProcessMemory(Address dst_address, Handle process_handle, uint64_t src_address, Size size);"),
    (0x75, "Result UnmapProcessMemory(Address dst_address, Handle process_handle, uint64_t src_address, Size size);"),
    (0x76, "Result QueryProcessMemory(Address out_memory_info, PageInfo* out_page_info, Handle process_handle, uint64_t address);"),
    (0x77, "Result MapProcessCodeMemory(Handle process_handle, uint64_t dst_address, uint64_t src_address, uint64_t size);"),
    (0x78, "Result UnmapProcessCodeMemory(Handle process_handle, uint64_t dst_address, uint64_t src_address, uint64_t size);"),
    (0x79, "Result CreateProcess(Handle* out_handle, Address parameters, Address caps, int32_t num_caps);"),
    (0x7A, "Result StartProcess(Handle process_handle, int32_t priority, int32_t core_id, uint64_t main_thread_stack_size);"),
    (0x7B, "Result TerminateProcess(Handle process_handle);"),
    (0x7C, "Result GetProcessInfo(int64_t* out_info, Handle process_handle, ProcessInfoType info_type);"),
    (0x7D, "Result CreateResourceLimit(Handle* out_handle);"),
    (0x7E, "Result SetResourceLimitLimitValue(Handle resource_limit_handle, LimitableResource which, int64_t limit_value);"),
    (0x7F, "void CallSecureMonitor(SecureMonitorArguments args);"),

    (0x90, "Result MapInsecureMemory(Address address, Size size);"),
    (0x91, "Result UnmapInsecureMemory(Address address, Size size);"),];

/// Calls with a custom register ABI; their wrappers are hand-written.
pub const CUSTOM_ABI: &[(u32, &str)] = &[
    (0x20, "SendSyncRequestLight"),
    (0x42, "ReplyAndReceiveLight"),
    (0x7F, "CallSecureMonitor"),
];
