//! Built-in template bodies
//!
//! Laravel controller and model, Blade views and the per-field fragments the
//! views are assembled from. Every body can be replaced by a `.stub` file in
//! the configured template directory.

/// Resource controller
pub const CONTROLLER: &str = r"<?php

namespace {{controllerNamespace}};

use {{modelNamespace}}\{{modelName}};
use Illuminate\Http\Request;

/**
 * Class {{modelName}}Controller
 * @package {{controllerNamespace}}
 */
class {{modelName}}Controller extends Controller
{
    /**
     * Display a listing of the resource.
     *
     * @return \Illuminate\Http\Response
     */
    public function index()
    {
        ${{modelNamePluralLowerCase}} = {{modelName}}::paginate(10);

        return view('{{modelView}}.index', compact('{{modelNamePluralLowerCase}}'))
            ->with('i', (request()->input('page', 1) - 1) * ${{modelNamePluralLowerCase}}->perPage());
    }

    /**
     * Show the form for creating a new resource.
     *
     * @return \Illuminate\Http\Response
     */
    public function create()
    {
        ${{modelNameLowerCase}} = new {{modelName}}();
        return view('{{modelView}}.create', compact('{{modelNameLowerCase}}'));
    }

    /**
     * Store a newly created resource in storage.
     *
     * @param  \Illuminate\Http\Request $request
     * @return \Illuminate\Http\Response
     */
    public function store(Request $request)
    {
        request()->validate({{modelName}}::$rules);

        {{modelName}}::create($request->all());

        return redirect()->route('{{modelRoute}}.index')
            ->with('success', '{{modelTitle}} created successfully.');
    }

    /**
     * Display the specified resource.
     *
     * @param  int $id
     * @return \Illuminate\Http\Response
     */
    public function show($id)
    {
        ${{modelNameLowerCase}} = {{modelName}}::findOrFail($id);

        return view('{{modelView}}.show', compact('{{modelNameLowerCase}}'));
    }

    /**
     * Show the form for editing the specified resource.
     *
     * @param  int $id
     * @return \Illuminate\Http\Response
     */
    public function edit($id)
    {
        ${{modelNameLowerCase}} = {{modelName}}::findOrFail($id);

        return view('{{modelView}}.edit', compact('{{modelNameLowerCase}}'));
    }

    /**
     * Update the specified resource in storage.
     *
     * @param  \Illuminate\Http\Request $request
     * @param  {{modelName}} ${{modelNameLowerCase}}
     * @return \Illuminate\Http\Response
     */
    public function update(Request $request, {{modelName}} ${{modelNameLowerCase}})
    {
        request()->validate({{modelName}}::$rules);

        ${{modelNameLowerCase}}->update($request->all());

        return redirect()->route('{{modelRoute}}.index')
            ->with('success', '{{modelTitle}} updated successfully');
    }

    /**
     * @param int $id
     * @return \Illuminate\Http\RedirectResponse
     * @throws \Exception
     */
    public function destroy($id)
    {
        {{modelName}}::findOrFail($id)->delete();

        return redirect()->route('{{modelRoute}}.index')
            ->with('success', '{{modelTitle}} deleted successfully');
    }
}
";

/// Eloquent model
pub const MODEL: &str = r"<?php

namespace {{modelNamespace}};

use Illuminate\Database\Eloquent\Model;

/**
 * Class {{modelName}}
 *
{{properties}} *
 * @package {{modelNamespace}}
 * @mixin \Illuminate\Database\Eloquent\Builder
 */
class {{modelName}} extends Model
{
    static $rules = [{{rules}}
    ];

    protected $perPage = 20;

    protected $table = '{{tableName}}';

    /**
     * Attributes that should be mass-assignable.
     *
     * @var array
     */
    protected $fillable = [{{fillable}}];
}
";

/// Paginated listing
pub const VIEW_INDEX: &str = r"@extends('{{layout}}')

@section('title', '{{modelTitle}}')

@section('content')
    <div class='container-xl'>
        <div class='d-flex justify-content-between align-items-center mb-3'>
            <h2 class='page-title'>{{ __('{{modelTitle}}') }}</h2>
            <a href='{{ route('{{modelRoute}}.create') }}' class='btn btn-primary'>
                {{ __('Create {{modelTitle}}') }}
            </a>
        </div>

        @if ($message = Session::get('success'))
            <div class='alert alert-success'>
                <p>{{ $message }}</p>
            </div>
        @endif

        <div class='card'>
            <div class='table-responsive'>
                <table class='table card-table table-vcenter'>
                    <thead>
                        <tr>
                            <th class='w-1'>No.</th>
{{tableHeader}}
                            <th class='w-1'></th>
                        </tr>
                    </thead>
                    <tbody>
                        @forelse (${{modelNamePluralLowerCase}} as ${{modelNameLowerCase}})
                            <tr>
                                <td>{{ ++$i }}</td>
{{tableBody}}
                                <td>
                                    <form action='{{ route('{{modelRoute}}.destroy', ${{modelNameLowerCase}}->id) }}' method='POST'>
                                        <a class='btn btn-sm btn-outline-primary' href='{{ route('{{modelRoute}}.show', ${{modelNameLowerCase}}->id) }}'>{{ __('Show') }}</a>
                                        <a class='btn btn-sm btn-outline-success' href='{{ route('{{modelRoute}}.edit', ${{modelNameLowerCase}}->id) }}'>{{ __('Edit') }}</a>
                                        @csrf
                                        @method('DELETE')
                                        <button type='submit' class='btn btn-sm btn-outline-danger' onclick='return confirm(&quot;Delete this {{modelTitle}}?&quot;)'>{{ __('Delete') }}</button>
                                    </form>
                                </td>
                            </tr>
                        @empty
                            <tr>
                                <td colspan='100%'>{{ __('No Data Found') }}</td>
                            </tr>
                        @endforelse
                    </tbody>
                </table>
            </div>
            <div class='card-footer'>
                {!! ${{modelNamePluralLowerCase}}->links() !!}
            </div>
        </div>
    </div>
@endsection
";

/// Creation page
pub const VIEW_CREATE: &str = r"@extends('{{layout}}')

@section('title', 'Create {{modelTitle}}')

@section('content')
    <div class='container-xl'>
        <div class='card'>
            <div class='card-header'>
                <h3 class='card-title'>{{ __('Create {{modelTitle}}') }}</h3>
            </div>
            <div class='card-body'>
                <form method='POST' action='{{ route('{{modelRoute}}.store') }}' role='form' enctype='multipart/form-data'>
                    @csrf
                    @include('{{modelView}}.form')
                </form>
            </div>
        </div>
    </div>
@endsection
";

/// Edit page
pub const VIEW_EDIT: &str = r"@extends('{{layout}}')

@section('title', 'Update {{modelTitle}}')

@section('content')
    <div class='container-xl'>
        <div class='card'>
            <div class='card-header'>
                <h3 class='card-title'>{{ __('Update {{modelTitle}}') }}</h3>
            </div>
            <div class='card-body'>
                <form method='POST' action='{{ route('{{modelRoute}}.update', ${{modelNameLowerCase}}->id) }}' role='form' enctype='multipart/form-data'>
                    {{ method_field('PATCH') }}
                    @csrf
                    @include('{{modelView}}.form')
                </form>
            </div>
        </div>
    </div>
@endsection
";

/// Form partial shared by the create and edit pages
pub const VIEW_FORM: &str = r"<div class='form-fields'>
{{form}}
    <div class='form-footer'>
        <button type='submit' class='btn btn-primary'>{{ __('Submit') }}</button>
        <a href='{{ route('{{modelRoute}}.index') }}' class='btn btn-link'>{{ __('Cancel') }}</a>
    </div>
</div>
";

/// Detail page
pub const VIEW_SHOW: &str = r"@extends('{{layout}}')

@section('title', 'Show {{modelTitle}}')

@section('content')
    <div class='container-xl'>
        <div class='card'>
            <div class='card-header d-flex justify-content-between'>
                <h3 class='card-title'>{{ __('Show {{modelTitle}}') }}</h3>
                <a class='btn btn-primary' href='{{ route('{{modelRoute}}.index') }}'>{{ __('Back') }}</a>
            </div>
            <div class='card-body'>
{{viewRows}}
            </div>
        </div>
    </div>
@endsection
";

/// One `<th>` per eligible field
pub const FRAGMENT_TABLE_HEAD: &str = "                            <th>{{fieldLabel}}</th>\n";

/// One `<td>` per eligible field
pub const FRAGMENT_TABLE_BODY: &str =
    "                                <td>{{ ${{modelNameLowerCase}}->{{fieldColumn}} }}</td>\n";

/// Read-only field on the detail page
pub const FRAGMENT_VIEW_FIELD: &str = r"                <div class='form-group mb-3'>
                    <strong>{{fieldLabel}}:</strong>
                    {{ ${{modelNameLowerCase}}->{{fieldColumn}} }}
                </div>
";

/// Single-line input
pub const FRAGMENT_FORM_FIELD: &str = r"    <div class='form-group mb-3'>
        <label class='form-label' for='{{fieldColumn}}'>{{fieldLabel}}</label>
        <input type='{{inputType}}' name='{{fieldColumn}}' id='{{fieldColumn}}' value='{{ old('{{fieldColumn}}', ${{modelNameLowerCase}}->{{fieldColumn}}) }}' class='form-control @error('{{fieldColumn}}') is-invalid @enderror' placeholder='{{fieldLabel}}'>
        @error('{{fieldColumn}}')
            <div class='invalid-feedback'>{{ $message }}</div>
        @enderror
    </div>
";

/// Multi-line input for long text columns
pub const FRAGMENT_FORM_TEXTAREA: &str = r"    <div class='form-group mb-3'>
        <label class='form-label' for='{{fieldColumn}}'>{{fieldLabel}}</label>
        <textarea name='{{fieldColumn}}' id='{{fieldColumn}}' rows='4' class='form-control @error('{{fieldColumn}}') is-invalid @enderror' placeholder='{{fieldLabel}}'>{{ old('{{fieldColumn}}', ${{modelNameLowerCase}}->{{fieldColumn}}) }}</textarea>
        @error('{{fieldColumn}}')
            <div class='invalid-feedback'>{{ $message }}</div>
        @enderror
    </div>
";

/// Checkbox for boolean columns
pub const FRAGMENT_FORM_CHECKBOX: &str = r"    <div class='form-check mb-3'>
        <input type='hidden' name='{{fieldColumn}}' value='0'>
        <input type='checkbox' name='{{fieldColumn}}' id='{{fieldColumn}}' value='1' class='form-check-input @error('{{fieldColumn}}') is-invalid @enderror' @checked(old('{{fieldColumn}}', ${{modelNameLowerCase}}->{{fieldColumn}}))>
        <label class='form-check-label' for='{{fieldColumn}}'>{{fieldLabel}}</label>
        @error('{{fieldColumn}}')
            <div class='invalid-feedback'>{{ $message }}</div>
        @enderror
    </div>
";
